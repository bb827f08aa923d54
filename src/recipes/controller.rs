use std::{path::Path, sync::Arc};

use crate::{
    editor::EditSession,
    export::{render_recipe_document, DocumentStyle},
    forms::{FormError, RecipeForm},
    images::{ingest_image, ingest_image_file, ImageError},
    lifecycle::{DeleteOutcome, Lifecycle, Services},
    log_info,
    models::Recipe,
    notify::Severity,
    presenter::RecipePresenter,
    settings::AppSettings,
    storage::SlotStore,
    views::{filter_recipes, RecipeQuery},
};

const ENABLE_LOGS: bool = true;

/// Recipe management: owns the collection, the active search, the edit
/// dialog state and its pending image.
pub struct RecipeBook {
    lifecycle: Lifecycle<Recipe>,
    presenter: Arc<dyn RecipePresenter>,
    query: RecipeQuery,
    editor: EditSession,
    image_draft: Option<String>,
    max_image_bytes: u64,
}

impl RecipeBook {
    /// Load the persisted recipes and render them through `query`.
    pub fn open(
        slots: Arc<dyn SlotStore>,
        services: Services,
        presenter: Arc<dyn RecipePresenter>,
        settings: &AppSettings,
        query: RecipeQuery,
    ) -> Self {
        let lifecycle = Lifecycle::open(slots, services, settings.recipe_notification_duration());
        log_info!("Opened recipe book with {} recipe(s)", lifecycle.store().len());

        let book = Self {
            lifecycle,
            presenter,
            query,
            editor: EditSession::new(),
            image_draft: None,
            max_image_bytes: settings.max_image_bytes,
        };
        book.refresh();
        book
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.lifecycle.store().records()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.lifecycle.store().get(id)
    }

    pub fn query(&self) -> &RecipeQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: RecipeQuery) {
        self.query = query;
        self.refresh();
    }

    /// Recipes matching the active query, in store order.
    pub fn visible(&self) -> Vec<&Recipe> {
        filter_recipes(self.recipes(), &self.query)
    }

    pub fn refresh(&self) {
        self.presenter.show_recipes(&self.visible(), &self.query);
    }

    pub fn add(&mut self, form: &RecipeForm, image: Option<String>) -> Result<String, FormError> {
        let input = form.to_input(image)?;
        let id = self.lifecycle.add(input).id.clone();
        self.refresh();
        Ok(id)
    }

    /// `Ok(false)` when `id` no longer exists; nothing changes in that case.
    pub fn update(
        &mut self,
        id: &str,
        form: &RecipeForm,
        image: Option<String>,
    ) -> Result<bool, FormError> {
        let input = form.to_input(image)?;
        let found = self.lifecycle.update(id, input).is_some();
        if found {
            self.refresh();
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

    pub fn image_draft(&self) -> Option<&str> {
        self.image_draft.as_deref()
    }

    pub fn open_add(&mut self) {
        self.editor.open_add();
        self.image_draft = None;
    }

    /// Start editing `id` and return the prefilled form. The record's current
    /// image becomes the draft so a submit without a new upload keeps it.
    pub fn open_edit(&mut self, id: &str) -> Option<RecipeForm> {
        let recipe = self.lifecycle.store().get(id)?;
        let form = RecipeForm::from_recipe(recipe);
        self.image_draft = recipe.image.clone();
        self.editor.open_edit(id);
        Some(form)
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
        self.image_draft = None;
    }

    /// Stage an uploaded image for the open dialog. Rejected uploads leave
    /// the draft as it was and warn the user.
    pub fn attach_image(&mut self, bytes: &[u8]) -> bool {
        let result = ingest_image(bytes, self.max_image_bytes);
        self.accept_image(result)
    }

    pub fn attach_image_file(&mut self, path: &Path) -> bool {
        let result = ingest_image_file(path, self.max_image_bytes);
        self.accept_image(result)
    }

    /// Save the dialog: update the record being edited, or add a new one.
    /// The dialog stays open when validation fails.
    pub fn submit(&mut self, form: &RecipeForm) -> Result<Option<String>, FormError> {
        let image = self.image_draft.clone();
        let result = match self.editor.editing_id().map(str::to_owned) {
            Some(id) => self
                .update(&id, form, image)
                .map(|found| found.then_some(id)),
            None => self.add(form, image).map(Some),
        };

        if result.is_ok() {
            self.close_editor();
        }
        result
    }

    /// Standalone detail page for one recipe.
    pub fn document(&self, id: &str, style: DocumentStyle) -> Option<String> {
        self.get(id)
            .map(|recipe| render_recipe_document(recipe, style))
    }

    /// Printable page for one recipe; printing is left to the page itself.
    pub fn export(&self, id: &str) -> Option<String> {
        let document = self.document(id, DocumentStyle::Print)?;
        self.lifecycle.notify(
            "Print page ready. Choose \"Save as PDF\" in the print dialog to keep a copy."
                .to_string(),
            Severity::Info,
        );
        Some(document)
    }

    fn accept_image(&mut self, result: Result<String, ImageError>) -> bool {
        match result {
            Ok(data_uri) => {
                self.image_draft = Some(data_uri);
                true
            }
            Err(ImageError::TooLarge { limit, .. }) => {
                self.lifecycle.notify(
                    format!("Images must be {} or smaller", describe_size(limit)),
                    Severity::Warning,
                );
                false
            }
            Err(err) => {
                self.lifecycle
                    .notify(format!("Could not use that image: {err}"), Severity::Error);
                false
            }
        }
    }
}

fn describe_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        images::MAX_IMAGE_BYTES,
        storage::MemorySlotStore,
        test_support::{date, Harness, RecordingRecipePresenter},
    };

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    struct Fixture {
        harness: Harness,
        presenter: Arc<RecordingRecipePresenter>,
        slots: Arc<MemorySlotStore>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                harness: Harness::on(date(2026, 10, 19)),
                presenter: Arc::new(RecordingRecipePresenter::default()),
                slots: Arc::new(MemorySlotStore::new()),
            }
        }

        fn book(&self) -> RecipeBook {
            RecipeBook::open(
                self.slots.clone(),
                self.harness.services(),
                self.presenter.clone(),
                &AppSettings::default(),
                RecipeQuery::default(),
            )
        }
    }

    fn form(name: &str, ingredients: &str) -> RecipeForm {
        RecipeForm {
            name: name.into(),
            category: "main".into(),
            cooking_time: "30".into(),
            servings: "2".into(),
            ingredients: ingredients.into(),
            instructions: "prepare\n\nserve".into(),
            notes: " tasty ".into(),
        }
    }

    #[test]
    fn open_renders_loaded_recipes() {
        let fixture = Fixture::new();
        let id = fixture.book().add(&form("Curry", "rice"), None).unwrap();

        let book = fixture.book();
        assert_eq!(book.recipes().len(), 1);
        assert_eq!(fixture.presenter.last(), vec![id]);
    }

    #[test]
    fn add_stores_normalized_fields_and_rerenders() {
        let fixture = Fixture::new();
        let mut book = fixture.book();

        let id = book.add(&form("Curry", "rice\n \ncurry powder"), None).unwrap();
        let recipe = book.get(&id).unwrap();

        assert_eq!(recipe.ingredients, vec!["rice", "curry powder"]);
        assert_eq!(recipe.instructions, vec!["prepare", "serve"]);
        assert_eq!(recipe.notes, "tasty");
        assert_eq!(recipe.created_at, "2026/10/19");
        assert_eq!(recipe.updated_at, None);
        assert_eq!(fixture.presenter.renders().len(), 2);
        assert_eq!(fixture.presenter.last(), vec![id]);
        assert_eq!(fixture.harness.messages(), vec!["Recipe added!".to_string()]);
        assert_eq!(
            fixture.harness.notifications()[0].duration,
            std::time::Duration::from_secs(3)
        );
    }

    #[test]
    fn search_filters_rendered_list() {
        let fixture = Fixture::new();
        let mut book = fixture.book();
        let curry = book.add(&form("Curry", "rice\ncurry powder"), None).unwrap();
        book.add(&form("Salad", "lettuce"), None).unwrap();

        book.set_query(RecipeQuery::new("rice", ""));
        assert_eq!(fixture.presenter.last(), vec![curry.clone()]);

        // The active query still applies after a mutation.
        book.add(&form("Toast", "bread"), None).unwrap();
        assert_eq!(fixture.presenter.last(), vec![curry]);
    }

    #[test]
    fn edit_without_new_image_keeps_existing_image() {
        let fixture = Fixture::new();
        let mut book = fixture.book();

        book.open_add();
        assert!(book.attach_image(PNG));
        let id = book.submit(&form("Curry", "rice")).unwrap().unwrap();
        let original_image = book.get(&id).unwrap().image.clone();
        assert!(original_image.is_some());
        assert!(!book.editor().is_open());
        assert_eq!(book.image_draft(), None);

        let mut edited = book.open_edit(&id).unwrap();
        edited.name = "Green curry".into();
        assert_eq!(book.submit(&edited).unwrap(), Some(id.clone()));

        let recipe = book.get(&id).unwrap();
        assert_eq!(recipe.name, "Green curry");
        assert_eq!(recipe.image, original_image);
        assert_eq!(recipe.updated_at.as_deref(), Some("2026/10/19"));
    }

    #[test]
    fn oversized_image_is_rejected_without_touching_records() {
        let fixture = Fixture::new();
        let mut book = fixture.book();

        book.open_add();
        book.attach_image(PNG);
        let id = book.submit(&form("Curry", "rice")).unwrap().unwrap();
        let before = book.get(&id).unwrap().image.clone();

        book.open_add();
        let mut huge = PNG.to_vec();
        huge.resize(MAX_IMAGE_BYTES as usize + 1, 0);
        assert!(!book.attach_image(&huge));
        assert_eq!(book.image_draft(), None);

        book.open_edit(&id);
        assert!(!book.attach_image(&huge));
        assert_eq!(book.image_draft(), before.as_deref());
        assert_eq!(book.get(&id).unwrap().image, before);

        let warning = fixture.harness.notifications().pop().unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.message, "Images must be 5 MB or smaller");
    }

    #[test]
    fn invalid_submit_keeps_dialog_open() {
        let fixture = Fixture::new();
        let mut book = fixture.book();

        book.open_add();
        let err = book.submit(&RecipeForm::default()).unwrap_err();
        assert_eq!(err, FormError::MissingField("name"));
        assert!(book.editor().is_open());
        assert!(book.recipes().is_empty());
    }

    #[test]
    fn update_of_deleted_recipe_is_noop() {
        let fixture = Fixture::new();
        let mut book = fixture.book();
        let id = book.add(&form("Curry", "rice"), None).unwrap();
        book.open_edit(&id).unwrap();
        assert_eq!(book.delete(&id), DeleteOutcome::Deleted);

        let renders = fixture.presenter.renders().len();
        assert_eq!(book.submit(&form("Curry", "rice")).unwrap(), None);
        assert!(book.recipes().is_empty());
        assert_eq!(fixture.presenter.renders().len(), renders);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let fixture = Fixture::new();
        let mut book = fixture.book();
        let id = book.add(&form("Curry", "rice"), None).unwrap();

        fixture.harness.confirm.answer(false);
        assert_eq!(book.delete(&id), DeleteOutcome::Declined);
        assert!(book.get(&id).is_some());

        let reopened = fixture.book();
        assert!(reopened.get(&id).is_some());
    }

    #[test]
    fn export_renders_print_page_and_notifies() {
        let fixture = Fixture::new();
        let mut book = fixture.book();
        let id = book.add(&form("Curry", "rice"), None).unwrap();

        let page = book.export(&id).unwrap();
        assert!(page.contains("<h1>Curry</h1>"));
        assert_eq!(
            fixture.harness.notifications().last().unwrap().severity,
            Severity::Info
        );

        assert!(book.export("missing").is_none());
        assert!(book.document(&id, DocumentStyle::Details).is_some());
    }

    #[test]
    fn describes_limits() {
        assert_eq!(describe_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(describe_size(1000), "1000 bytes");
    }
}
