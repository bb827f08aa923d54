//! Create/update/delete over a [`RecordStore`], each followed by a persist
//! and a user notification. View refreshes are the owning controller's job.

use std::{sync::Arc, time::Duration};

use uuid::Uuid;

use crate::{
    log_debug, log_error,
    notify::{Notification, Notifier, Severity},
    storage::SlotStore,
    store::{Record, RecordStore},
    utils::Clock,
};

const ENABLE_LOGS: bool = true;

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Approves everything; used when the user already opted in (e.g. `--yes`).
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// External collaborators shared by both subsystems.
#[derive(Clone)]
pub struct Services {
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn Confirm>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotFound,
}

pub struct Lifecycle<R: Record> {
    store: RecordStore<R>,
    services: Services,
    notification_duration: Duration,
}

impl<R: Record> Lifecycle<R> {
    /// Build the lifecycle and load the persisted snapshot.
    pub fn open(
        slots: Arc<dyn SlotStore>,
        services: Services,
        notification_duration: Duration,
    ) -> Self {
        let mut store = RecordStore::new(slots);
        store.load();
        Self {
            store,
            services,
            notification_duration,
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn add(&mut self, input: R::Input) -> &R {
        let id = self.fresh_id();
        let record = R::create(id, input, R::stamp(self.services.clock.as_ref()));
        log_debug!("Adding {} {}", R::NOUN, record.id());

        self.store.insert_front(record);
        self.save();
        self.notify(format!("{} added!", capitalized(R::NOUN)), Severity::Success);

        &self.store.records()[0]
    }

    /// Merge `input` into the record with `id`. Unknown ids are a silent no-op.
    pub fn update(&mut self, id: &str, input: R::Input) -> Option<&R> {
        if !self.store.contains(id) {
            log_debug!("Ignoring update for unknown {} {id}", R::NOUN);
            return None;
        }

        let stamp = R::stamp(self.services.clock.as_ref());
        self.store.update_by_id(id, input, stamp);
        self.save();
        self.notify(
            format!("{} updated!", capitalized(R::NOUN)),
            Severity::Success,
        );

        self.store.get(id)
    }

    /// Remove a record after the user confirms. Nothing changes when the user
    /// declines or the id is unknown.
    pub fn delete(&mut self, id: &str) -> DeleteOutcome {
        let prompt = format!("Delete this {}? This cannot be undone.", R::NOUN);
        if !self.services.confirm.confirm(&prompt) {
            return DeleteOutcome::Declined;
        }

        match self.store.remove_by_id(id) {
            Some(_) => {
                self.save();
                self.notify(format!("{} deleted.", capitalized(R::NOUN)), Severity::Info);
                DeleteOutcome::Deleted
            }
            None => {
                log_debug!("Ignoring delete for unknown {} {id}", R::NOUN);
                DeleteOutcome::NotFound
            }
        }
    }

    pub fn notify(&self, message: String, severity: Severity) {
        self.services.notifier.notify(Notification {
            message,
            severity,
            duration: self.notification_duration,
        });
    }

    /// A failed write leaves memory ahead of storage for the rest of the session.
    fn save(&self) {
        if let Err(err) = self.store.persist() {
            log_error!("{err:#}");
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }
}

fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
