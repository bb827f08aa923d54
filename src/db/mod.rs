//! SQLite file holding the storage slots.

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};

mod migrations;

use migrations::run_migrations;

/// One connection, opened and migrated up front. Every call finishes its
/// statement before returning, so a write is on disk once `put_slot` is done.
pub struct Database {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl Database {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let mut conn = Connection::open(&path)
            .with_context(|| format!("failed to open SQLite database {}", path.display()))?;
        if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
            warn!("Failed to enable WAL mode: {err}");
        }
        run_migrations(&mut conn).context("failed to run database migrations")?;

        info!("Database ready at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw contents of a slot, `None` if it was never written.
    pub fn get_slot(&self, key: &str) -> Result<Option<String>> {
        self.conn()
            .query_row(
                "SELECT value FROM storage_slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("failed to read slot '{key}'"))
    }

    /// Overwrite a slot with a new snapshot.
    pub fn put_slot(&self, key: &str, value: &str) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO storage_slots (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("failed to write slot '{key}'"))?;
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
