use std::sync::Arc;

use anyhow::{bail, Result};

use crate::{
    cli::{SeasoningCommand, SeasoningFields, StatusArg},
    forms::SeasoningForm,
    lifecycle::DeleteOutcome,
    seasonings::SeasoningShelf,
    terminal::{Rendering, TerminalSeasoningPresenter},
    views::StatusFilter,
    AppState,
};

pub fn dispatch(state: &AppState, command: SeasoningCommand) -> Result<()> {
    match command {
        SeasoningCommand::List { status } => list(state, status),
        SeasoningCommand::Add(fields) => add(state, &fields),
        SeasoningCommand::Edit { id, fields } => edit(state, &id, &fields),
        SeasoningCommand::Delete { id } => delete(state, &id),
        SeasoningCommand::Stats => stats(state),
    }
}

fn shelf(state: &AppState, rendering: Rendering, filter: StatusFilter) -> SeasoningShelf {
    state.seasoning_shelf(Arc::new(TerminalSeasoningPresenter::new(rendering)), filter)
}

pub fn list(state: &AppState, status: StatusArg) -> Result<()> {
    // Opening renders the rows and runs the expiry check.
    shelf(state, Rendering::Listing, status.into());
    Ok(())
}

pub fn stats(state: &AppState) -> Result<()> {
    shelf(state, Rendering::Summary, StatusFilter::All);
    Ok(())
}

pub fn add(state: &AppState, fields: &SeasoningFields) -> Result<()> {
    let mut shelf = shelf(state, Rendering::Silent, StatusFilter::All);
    let mut form = shelf.open_add();
    apply_fields(&mut form, fields);
    submit(&mut shelf, &form)
}

pub fn edit(state: &AppState, id: &str, fields: &SeasoningFields) -> Result<()> {
    let mut shelf = shelf(state, Rendering::Silent, StatusFilter::All);
    let Some(mut form) = shelf.open_edit(id) else {
        bail!("No seasoning with id {id}");
    };
    apply_fields(&mut form, fields);
    submit(&mut shelf, &form)
}

fn submit(shelf: &mut SeasoningShelf, form: &SeasoningForm) -> Result<()> {
    match shelf.submit(form)? {
        Some(id) => println!("{id}"),
        None => bail!("The seasoning was deleted while it was being edited"),
    }
    Ok(())
}

pub fn delete(state: &AppState, id: &str) -> Result<()> {
    let mut shelf = shelf(state, Rendering::Silent, StatusFilter::All);
    match shelf.delete(id) {
        DeleteOutcome::NotFound => bail!("No seasoning with id {id}"),
        DeleteOutcome::Deleted | DeleteOutcome::Declined => Ok(()),
    }
}

fn apply_fields(form: &mut SeasoningForm, fields: &SeasoningFields) {
    let targets = [
        (&mut form.name, &fields.name),
        (&mut form.category, &fields.category),
        (&mut form.expiry_date, &fields.expiry_date),
        (&mut form.opened_date, &fields.opened_date),
        (&mut form.quantity, &fields.quantity),
        (&mut form.location, &fields.location),
        (&mut form.notes, &fields.notes),
    ];

    for (target, value) in targets {
        if let Some(value) = value {
            target.clone_from(value);
        }
    }
}
