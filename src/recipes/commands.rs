use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};

use crate::{
    cli::{RecipeCommand, RecipeFields},
    export::DocumentStyle,
    forms::RecipeForm,
    lifecycle::DeleteOutcome,
    recipes::RecipeBook,
    terminal::{format_recipe, Rendering, TerminalRecipePresenter},
    views::RecipeQuery,
    AppState,
};

pub fn dispatch(state: &AppState, command: RecipeCommand) -> Result<()> {
    match command {
        RecipeCommand::List { search, category } => list(state, search, category),
        RecipeCommand::Show { id, html } => show(state, &id, html),
        RecipeCommand::Add(fields) => add(state, &fields),
        RecipeCommand::Edit { id, fields } => edit(state, &id, &fields),
        RecipeCommand::Delete { id } => delete(state, &id),
        RecipeCommand::Export { id, output } => export(state, &id, output),
    }
}

fn book(state: &AppState, rendering: Rendering, query: RecipeQuery) -> RecipeBook {
    state.recipe_book(Arc::new(TerminalRecipePresenter::new(rendering)), query)
}

pub fn list(state: &AppState, search: String, category: String) -> Result<()> {
    // Opening renders the filtered list.
    book(state, Rendering::Listing, RecipeQuery::new(search, category));
    Ok(())
}

pub fn show(state: &AppState, id: &str, html: bool) -> Result<()> {
    println!("{}", show_text(state, id, html)?);
    Ok(())
}

fn show_text(state: &AppState, id: &str, html: bool) -> Result<String> {
    let book = book(state, Rendering::Silent, RecipeQuery::default());
    let text = if html {
        book.document(id, DocumentStyle::Details)
    } else {
        book.get(id).map(format_recipe)
    };
    text.with_context(|| format!("No recipe with id {id}"))
}

pub fn add(state: &AppState, fields: &RecipeFields) -> Result<()> {
    let mut book = book(state, Rendering::Silent, RecipeQuery::default());
    book.open_add();

    let mut form = RecipeForm::default();
    apply_fields(&mut form, fields);
    submit(&mut book, &form, fields)
}

pub fn edit(state: &AppState, id: &str, fields: &RecipeFields) -> Result<()> {
    let mut book = book(state, Rendering::Silent, RecipeQuery::default());
    let Some(mut form) = book.open_edit(id) else {
        bail!("No recipe with id {id}");
    };

    apply_fields(&mut form, fields);
    submit(&mut book, &form, fields)
}

fn submit(book: &mut RecipeBook, form: &RecipeForm, fields: &RecipeFields) -> Result<()> {
    if let Some(path) = &fields.image {
        if !book.attach_image_file(path) {
            bail!("Image {} was not attached", path.display());
        }
    }

    match book.submit(form)? {
        Some(id) => println!("{id}"),
        None => bail!("The recipe was deleted while it was being edited"),
    }
    Ok(())
}

pub fn delete(state: &AppState, id: &str) -> Result<()> {
    let mut book = book(state, Rendering::Silent, RecipeQuery::default());
    match book.delete(id) {
        DeleteOutcome::NotFound => bail!("No recipe with id {id}"),
        DeleteOutcome::Deleted | DeleteOutcome::Declined => Ok(()),
    }
}

pub fn export(state: &AppState, id: &str, output: Option<PathBuf>) -> Result<()> {
    let page = export_page(state, id)?;
    match output {
        Some(path) => fs::write(&path, page)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{page}"),
    }
    Ok(())
}

fn export_page(state: &AppState, id: &str) -> Result<String> {
    let book = book(state, Rendering::Silent, RecipeQuery::default());
    book.export(id)
        .with_context(|| format!("No recipe with id {id}"))
}

/// Overlay the fields given on the command line onto `form`.
fn apply_fields(form: &mut RecipeForm, fields: &RecipeFields) {
    let overlay = |target: &mut String, value: &Option<String>| {
        if let Some(value) = value {
            target.clone_from(value);
        }
    };

    overlay(&mut form.name, &fields.name);
    overlay(&mut form.category, &fields.category);
    overlay(&mut form.cooking_time, &fields.cooking_time);
    overlay(&mut form.servings, &fields.servings);
    overlay(&mut form.notes, &fields.notes);

    if !fields.ingredients.is_empty() {
        form.ingredients = fields.ingredients.join("\n");
    }
    if !fields.steps.is_empty() {
        form.instructions = fields.steps.join("\n");
    }
}
