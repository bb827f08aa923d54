pub mod cli;
pub mod db;
pub mod editor;
pub mod export;
pub mod forms;
pub mod images;
pub mod lifecycle;
pub mod models;
pub mod notify;
pub mod presenter;
pub mod recipes;
pub mod seasonings;
pub mod settings;
pub mod storage;
pub mod store;
pub mod terminal;
pub mod utils;
pub mod views;

#[cfg(test)]
mod test_support;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::{Cli, Command};
use db::Database;
use lifecycle::{AlwaysConfirm, Confirm, Services};
use presenter::{RecipePresenter, SeasoningPresenter};
use recipes::RecipeBook;
use seasonings::SeasoningShelf;
use settings::SettingsStore;
use storage::{MemorySlotStore, SlotStore};
use terminal::{StdinConfirm, TerminalNotifier};
use utils::SystemClock;
use views::{RecipeQuery, StatusFilter};

const DATA_DIR_ENV: &str = "LARDER_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "larder-data";

/// Everything a command needs: the storage slots, the shared collaborators
/// and the loaded settings.
pub struct AppState {
    pub(crate) slots: Arc<dyn SlotStore>,
    pub(crate) services: Services,
    pub(crate) settings: SettingsStore,
}

impl AppState {
    pub fn new(slots: Arc<dyn SlotStore>, services: Services, settings: SettingsStore) -> Self {
        Self {
            slots,
            services,
            settings,
        }
    }

    pub fn recipe_book(&self, presenter: Arc<dyn RecipePresenter>, query: RecipeQuery) -> RecipeBook {
        RecipeBook::open(
            self.slots.clone(),
            self.services.clone(),
            presenter,
            self.settings.settings(),
            query,
        )
    }

    pub fn seasoning_shelf(
        &self,
        presenter: Arc<dyn SeasoningPresenter>,
        filter: StatusFilter,
    ) -> SeasoningShelf {
        SeasoningShelf::open(
            self.slots.clone(),
            self.services.clone(),
            presenter,
            self.settings.settings(),
            filter,
        )
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init(cli.debug || utils::logging::debug_requested());

    info!("larder starting up...");

    let data_dir = resolve_data_dir(cli.data_dir.clone());
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let settings = SettingsStore::new(data_dir.join("settings.json"))?;
    let slots = open_slots(&data_dir, &settings, cli.ephemeral)?;

    let confirm: Arc<dyn Confirm> = if cli.yes {
        Arc::new(AlwaysConfirm)
    } else {
        Arc::new(StdinConfirm)
    };
    let services = Services {
        notifier: Arc::new(TerminalNotifier),
        confirm,
        clock: Arc::new(SystemClock),
    };

    let state = AppState::new(slots, services, settings);
    match cli.command {
        Command::Recipes(command) => recipes::commands::dispatch(&state, command),
        Command::Seasonings(command) => seasonings::commands::dispatch(&state, command),
    }
}

/// `--data-dir`, then `LARDER_DATA_DIR`, then `./larder-data`.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

fn open_slots(data_dir: &Path, settings: &SettingsStore, ephemeral: bool) -> Result<Arc<dyn SlotStore>> {
    if ephemeral {
        info!("Using in-memory storage; nothing will be saved");
        return Ok(Arc::new(MemorySlotStore::new()));
    }

    let db_path = data_dir.join(&settings.settings().database_file);
    let database = Database::new(db_path)?;
    info!("Using database at {}", database.path().display());
    Ok(Arc::new(database))
}
