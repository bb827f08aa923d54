//! String-keyed snapshot slots.
//!
//! Each record kind owns one slot holding the JSON array of its records.
//! SQLite backs the slots in normal runs; an in-memory map backs tests and
//! `--ephemeral` sessions.

use std::{collections::HashMap, sync::Mutex};

use anyhow::Result;

use crate::db::Database;

pub trait SlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}

impl SlotStore for Database {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.get_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.put_slot(key, value)
    }
}

#[derive(Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
