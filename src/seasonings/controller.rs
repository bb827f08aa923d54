use std::sync::Arc;

use crate::{
    editor::EditSession,
    forms::{FormError, SeasoningForm},
    lifecycle::{DeleteOutcome, Lifecycle, Services},
    log_info,
    models::Seasoning,
    notify::Severity,
    presenter::SeasoningPresenter,
    settings::AppSettings,
    storage::SlotStore,
    views::{seasoning_view, ExpiryAlert, ExpiryStatistics, SeasoningView, StatusFilter},
};

const ENABLE_LOGS: bool = true;

/// Seasoning inventory: owns the collection, the status filter, the edit
/// dialog state and the statistics of the last refresh.
pub struct SeasoningShelf {
    lifecycle: Lifecycle<Seasoning>,
    presenter: Arc<dyn SeasoningPresenter>,
    filter: StatusFilter,
    editor: EditSession,
    statistics: ExpiryStatistics,
}

impl SeasoningShelf {
    /// Load, render, then run the expiry check once.
    pub fn open(
        slots: Arc<dyn SlotStore>,
        services: Services,
        presenter: Arc<dyn SeasoningPresenter>,
        settings: &AppSettings,
        filter: StatusFilter,
    ) -> Self {
        let lifecycle =
            Lifecycle::open(slots, services, settings.seasoning_notification_duration());
        log_info!(
            "Opened seasoning shelf with {} seasoning(s)",
            lifecycle.store().len()
        );

        let mut shelf = Self {
            lifecycle,
            presenter,
            filter,
            editor: EditSession::new(),
            statistics: ExpiryStatistics::default(),
        };
        shelf.refresh();
        shelf.check_expiry();
        shelf
    }

    pub fn seasonings(&self) -> &[Seasoning] {
        self.lifecycle.store().records()
    }

    pub fn get(&self, id: &str) -> Option<&Seasoning> {
        self.lifecycle.store().get(id)
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Counts over the whole collection as of the last refresh.
    pub fn statistics(&self) -> ExpiryStatistics {
        self.statistics
    }

    pub fn view(&self) -> SeasoningView<'_> {
        let today = self.lifecycle.services().clock.today();
        seasoning_view(self.seasonings(), self.filter, today)
    }

    pub fn refresh(&mut self) {
        let today = self.lifecycle.services().clock.today();
        let view = seasoning_view(self.lifecycle.store().records(), self.filter, today);
        self.statistics = view.statistics;
        self.presenter.show_seasonings(&view);
    }

    /// Warn about expired seasonings, or else mention ones expiring soon.
    pub fn check_expiry(&self) {
        match self.statistics.alert() {
            Some(ExpiryAlert::Expired(count)) => {
                self.lifecycle.notify(expired_message(count), Severity::Warning)
            }
            Some(ExpiryAlert::ExpiringSoon(count)) => {
                self.lifecycle.notify(expiring_soon_message(count), Severity::Info)
            }
            None => {}
        }
    }

    pub fn add(&mut self, form: &SeasoningForm) -> Result<String, FormError> {
        let input = form.to_input()?;
        let id = self.lifecycle.add(input).id.clone();
        self.refresh();
        self.check_expiry();
        Ok(id)
    }

    /// `Ok(false)` when `id` no longer exists; nothing changes in that case.
    pub fn update(&mut self, id: &str, form: &SeasoningForm) -> Result<bool, FormError> {
        let input = form.to_input()?;
        let found = self.lifecycle.update(id, input).is_some();
        if found {
            self.refresh();
            self.check_expiry();
        }
        Ok(found)
    }

    pub fn delete(&mut self, id: &str) -> DeleteOutcome {
        let outcome = self.lifecycle.delete(id);
        if outcome == DeleteOutcome::Deleted {
            self.refresh();
        }
        outcome
    }

    pub fn editor(&self) -> &EditSession {
        &self.editor
    }

    /// Start a new entry; the form comes back with its defaults filled in.
    pub fn open_add(&mut self) -> SeasoningForm {
        self.editor.open_add();
        SeasoningForm::default()
    }

    pub fn open_edit(&mut self, id: &str) -> Option<SeasoningForm> {
        let form = SeasoningForm::from_seasoning(self.lifecycle.store().get(id)?);
        self.editor.open_edit(id);
        Some(form)
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    /// Save the dialog: update the seasoning being edited, or add a new one.
    pub fn submit(&mut self, form: &SeasoningForm) -> Result<Option<String>, FormError> {
        let result = match self.editor.editing_id().map(str::to_owned) {
            Some(id) => self.update(&id, form).map(|found| found.then_some(id)),
            None => self.add(form).map(Some),
        };

        if result.is_ok() {
            self.close_editor();
        }
        result
    }
}

fn expired_message(count: usize) -> String {
    if count == 1 {
        "1 seasoning has expired!".to_string()
    } else {
        format!("{count} seasonings have expired!")
    }
}

fn expiring_soon_message(count: usize) -> String {
    if count == 1 {
        "1 seasoning expires soon".to_string()
    } else {
        format!("{count} seasonings expire soon")
    }
}
