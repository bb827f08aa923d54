//! Fakes for the external collaborators, shared by unit tests.

use std::{
    cell::{Cell, RefCell},
    sync::Arc,
};

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    lifecycle::{Confirm, Services},
    models::Recipe,
    notify::{Notification, Notifier},
    presenter::{RecipePresenter, SeasoningPresenter},
    storage::SlotStore,
    utils::Clock,
    views::{ExpiryStatistics, RecipeQuery, SeasoningView},
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Always 09:00 UTC on a fixed day.
pub struct FixedClock {
    today: NaiveDate,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.today.and_hms_opt(9, 0, 0).unwrap().and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

pub struct ScriptedConfirm {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.get()
    }
}

/// Every read and write fails, like a full or unavailable disk.
pub struct FailingSlotStore;

impl SlotStore for FailingSlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        bail!("slot '{key}' is unavailable")
    }

    fn write_slot(&self, key: &str, _value: &str) -> Result<()> {
        bail!("quota exceeded writing slot '{key}'")
    }
}

/// Records the ids of every rendered recipe list.
#[derive(Default)]
pub struct RecordingRecipePresenter {
    renders: RefCell<Vec<Vec<String>>>,
}

impl RecordingRecipePresenter {
    pub fn renders(&self) -> Vec<Vec<String>> {
        self.renders.borrow().clone()
    }

    pub fn last(&self) -> Vec<String> {
        self.renders.borrow().last().cloned().unwrap_or_default()
    }
}

impl RecipePresenter for RecordingRecipePresenter {
    fn show_recipes(&self, recipes: &[&Recipe], _query: &RecipeQuery) {
        self.renders
            .borrow_mut()
            .push(recipes.iter().map(|recipe| recipe.id.clone()).collect());
    }
}

/// Records row ids and statistics of every rendered seasoning view.
#[derive(Default)]
pub struct RecordingSeasoningPresenter {
    renders: RefCell<Vec<(Vec<String>, ExpiryStatistics)>>,
}

impl RecordingSeasoningPresenter {
    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn last(&self) -> (Vec<String>, ExpiryStatistics) {
        self.renders.borrow().last().cloned().unwrap_or_default()
    }
}

impl SeasoningPresenter for RecordingSeasoningPresenter {
    fn show_seasonings(&self, view: &SeasoningView<'_>) {
        let ids = view
            .rows
            .iter()
            .map(|row| row.seasoning.id.clone())
            .collect();
        self.renders.borrow_mut().push((ids, view.statistics));
    }
}

/// Recording collaborators bundled behind a [`Services`] value.
pub struct Harness {
    pub notifier: Arc<RecordingNotifier>,
    pub confirm: Arc<ScriptedConfirm>,
    pub clock: Arc<FixedClock>,
}

impl Harness {
    /// Confirms by default.
    pub fn on(today: NaiveDate) -> Self {
        Self {
            notifier: Arc::new(RecordingNotifier::default()),
            confirm: Arc::new(ScriptedConfirm {
                answer: Cell::new(true),
                prompts: RefCell::new(Vec::new()),
            }),
            clock: Arc::new(FixedClock { today }),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            notifier: self.notifier.clone(),
            confirm: self.confirm.clone(),
            clock: self.clock.clone(),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifier.notifications.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }
}
