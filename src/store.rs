//! In-memory record collections mirrored to a storage slot.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::{log_debug, log_warn, storage::SlotStore, utils::Clock};

const ENABLE_LOGS: bool = true;

/// A record kind that can live in a [`RecordStore`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Validated field values used for both creation and edits.
    type Input;

    /// Storage slot holding the serialized collection.
    const SLOT: &'static str;
    /// Lowercase singular name used in user-facing messages.
    const NOUN: &'static str;

    fn id(&self) -> &str;

    fn create(id: String, input: Self::Input, created_at: String) -> Self;

    /// Overwrite editable fields from `input` and record the edit time.
    fn merge(&mut self, input: Self::Input, updated_at: String);

    /// Creation/update timestamp in this kind's stored format.
    fn stamp(clock: &dyn Clock) -> String;
}

/// Ordered collection of one record kind. Newest records sit at the front.
pub struct RecordStore<R: Record> {
    slots: Arc<dyn SlotStore>,
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Empty store; call [`RecordStore::load`] to read the persisted snapshot.
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self {
            slots,
            records: Vec::new(),
        }
    }

    /// Replace the in-memory collection with the persisted snapshot.
    ///
    /// Absent, unreadable or malformed snapshots yield an empty collection.
    pub fn load(&mut self) -> &[R] {
        self.records = match self.slots.read_slot(R::SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<R>>(&raw) {
                Ok(records) => records,
                Err(err) => {
                    log_warn!("Discarding malformed '{}' snapshot: {err}", R::SLOT);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log_warn!("Failed to read '{}' snapshot: {err:#}", R::SLOT);
                Vec::new()
            }
        };

        log_debug!("Loaded {} {} record(s)", self.records.len(), R::NOUN);
        &self.records
    }

    /// Serialize the whole collection and overwrite the slot.
    pub fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.records)
            .with_context(|| format!("failed to serialize {} records", R::NOUN))?;
        self.slots
            .write_slot(R::SLOT, &serialized)
            .with_context(|| format!("failed to persist slot '{}'", R::SLOT))
    }

    pub fn insert_front(&mut self, record: R) {
        self.records.insert(0, record);
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<R> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    pub fn update_by_id(&mut self, id: &str, input: R::Input, updated_at: String) -> Option<&R> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.merge(input, updated_at);
        Some(&*record)
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Recipe, RecipeInput, Seasoning},
        storage::MemorySlotStore,
        test_support::{date, FailingSlotStore},
    };

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe::create(
            id.into(),
            RecipeInput {
                name: name.into(),
                category: "main".into(),
                cooking_time: 10,
                servings: 2,
                ingredients: vec!["a".into(), "b".into()],
                instructions: vec!["step 1".into(), "step 2".into()],
                notes: "note".into(),
                image: None,
            },
            "2026/10/19".into(),
        )
    }

    #[test]
    fn round_trip_preserves_records_and_order() {
        let slots: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
        let mut store = RecordStore::<Recipe>::new(slots.clone());
        store.insert_front(recipe("1", "First"));
        store.insert_front(recipe("2", "Second"));
        store.persist().unwrap();

        let mut reloaded = RecordStore::<Recipe>::new(slots);
        reloaded.load();

        assert_eq!(reloaded.records(), store.records());
        assert_eq!(reloaded.records()[0].id, "2");
    }

    #[test]
    fn load_is_idempotent() {
        let slots: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
        let mut store = RecordStore::<Recipe>::new(slots);
        store.insert_front(recipe("1", "Only"));
        store.persist().unwrap();

        let first = store.load().to_vec();
        let second = store.load().to_vec();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn absent_snapshot_loads_empty() {
        let mut store = RecordStore::<Seasoning>::new(Arc::new(MemorySlotStore::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_snapshot_loads_empty() {
        let slots = Arc::new(MemorySlotStore::new());
        slots.write_slot("seasonings", "{not json").unwrap();

        let mut store = RecordStore::<Seasoning>::new(slots.clone());
        assert!(store.load().is_empty());

        // Valid JSON with a bad date is malformed too.
        slots
            .write_slot(
                "seasonings",
                r#"[{"id":"1","name":"Salt","category":"dry","expiryDate":"soon","createdAt":"x"}]"#,
            )
            .unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn unreadable_slot_loads_empty() {
        let mut store = RecordStore::<Recipe>::new(Arc::new(FailingSlotStore));
        assert!(store.load().is_empty());
    }

    #[test]
    fn persist_reports_storage_failure() {
        let mut store = RecordStore::<Recipe>::new(Arc::new(FailingSlotStore));
        store.insert_front(recipe("1", "Kept in memory"));

        assert!(store.persist().is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_by_id_removes_at_most_one() {
        let mut store = RecordStore::<Recipe>::new(Arc::new(MemorySlotStore::new()));
        store.insert_front(recipe("1", "A"));
        store.insert_front(recipe("2", "B"));

        assert_eq!(store.remove_by_id("1").map(|r| r.name), Some("A".into()));
        assert!(store.remove_by_id("1").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_by_id_merges_and_stamps() {
        let mut store = RecordStore::<Recipe>::new(Arc::new(MemorySlotStore::new()));
        store.insert_front(recipe("1", "Old"));

        let input = RecipeInput {
            name: "New".into(),
            category: "side".into(),
            cooking_time: 5,
            servings: 1,
            ingredients: vec!["x".into()],
            instructions: vec!["y".into()],
            notes: String::new(),
            image: None,
        };
        let updated = store.update_by_id("1", input.clone(), "2026/10/20".into()).unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.updated_at.as_deref(), Some("2026/10/20"));

        assert!(store.update_by_id("missing", input, "2026/10/20".into()).is_none());
    }

    #[test]
    fn seasonings_round_trip_through_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::db::Database::new(dir.path().join("larder.sqlite3")).unwrap();
        let slots: Arc<dyn SlotStore> = Arc::new(db);

        let mut store = RecordStore::<Seasoning>::new(slots.clone());
        store.insert_front(Seasoning::create(
            "s1".into(),
            crate::models::SeasoningInput {
                name: "Mirin".into(),
                category: "liquid".into(),
                expiry_date: date(2027, 3, 1),
                opened_date: Some(date(2026, 9, 1)),
                quantity: 60,
                location: "fridge".into(),
                notes: String::new(),
            },
            "2026-10-19T00:00:00.000Z".into(),
        ));
        store.persist().unwrap();

        let mut reloaded = RecordStore::<Seasoning>::new(slots);
        assert_eq!(reloaded.load(), store.records());
    }
}
