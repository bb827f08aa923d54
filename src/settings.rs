use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::images::MAX_IMAGE_BYTES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    /// SQLite file name, relative to the data directory.
    pub database_file: String,
    pub max_image_bytes: u64,
    pub recipe_notification_ms: u64,
    pub seasoning_notification_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            database_file: "larder.sqlite3".into(),
            max_image_bytes: MAX_IMAGE_BYTES,
            recipe_notification_ms: 3_000,
            seasoning_notification_ms: 4_000,
        }
    }
}

impl AppSettings {
    pub fn recipe_notification_duration(&self) -> Duration {
        Duration::from_millis(self.recipe_notification_ms)
    }

    pub fn seasoning_notification_duration(&self) -> Duration {
        Duration::from_millis(self.seasoning_notification_ms)
    }
}

/// `settings.json` in the data directory. A missing file is created with
/// defaults; an unreadable one falls back to defaults without being touched.
pub struct SettingsStore {
    path: PathBuf,
    data: AppSettings,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            let store = Self {
                path,
                data: AppSettings::default(),
            };
            store.persist()?;
            return Ok(store);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let data = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(err) => {
                log::warn!(
                    "Ignoring malformed settings at {}: {err}",
                    path.display()
                );
                AppSettings::default()
            }
        };

        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &AppSettings {
        &self.data
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
