//! Terminal adapters for the notification, confirmation and rendering seams.

use std::io::{self, BufRead, Write};

use crate::{
    lifecycle::Confirm,
    models::Recipe,
    notify::{Notification, Notifier},
    presenter::{RecipePresenter, SeasoningPresenter},
    views::{
        recipes::EMPTY_RECIPES_MESSAGE, ExpiryStatistics, QuantityLevel, RecipeCard, RecipeQuery,
        SeasoningRow, SeasoningView,
    },
};

/// Notifications go to stderr so stdout stays clean for listings and HTML.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!(
            "[{}] {}",
            notification.severity.as_str(),
            notification.message
        );
    }
}

/// Asks on stderr and reads a `y`/`yes` answer from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// How much of each refresh a presenter writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// The full list.
    Listing,
    /// Only the counts.
    Summary,
    /// Nothing. Commands whose stdout is a document or an id use this.
    Silent,
}

pub struct TerminalRecipePresenter {
    rendering: Rendering,
}

impl TerminalRecipePresenter {
    pub fn new(rendering: Rendering) -> Self {
        Self { rendering }
    }

    /// The text one refresh writes to stdout.
    pub fn render(&self, recipes: &[&Recipe], query: &RecipeQuery) -> String {
        match self.rendering {
            Rendering::Silent => String::new(),
            Rendering::Summary => format!("{} recipe(s)\n", recipes.len()),
            Rendering::Listing if recipes.is_empty() => {
                if query.is_empty() {
                    format!("{EMPTY_RECIPES_MESSAGE}\n")
                } else {
                    "No recipes match your search.\n".to_string()
                }
            }
            Rendering::Listing => recipes
                .iter()
                .map(|recipe| format!("{}\n", format_card(&RecipeCard::new(recipe))))
                .collect(),
        }
    }
}

impl RecipePresenter for TerminalRecipePresenter {
    fn show_recipes(&self, recipes: &[&Recipe], query: &RecipeQuery) {
        print!("{}", self.render(recipes, query));
    }
}

fn format_card(card: &RecipeCard<'_>) -> String {
    let recipe = card.recipe;
    let mut lines = vec![format!("{}  [{}]", recipe.name, recipe.id)];

    let mut meta = vec![recipe.category.clone()];
    if recipe.cooking_time > 0 {
        meta.push(format!("{} min", recipe.cooking_time));
    }
    meta.push(format!("serves {}", recipe.servings));
    lines.push(format!("  {}", meta.join(" | ")));

    if !card.ingredients.is_empty() {
        let mut ingredients = card.ingredients.join(", ");
        if card.hidden_ingredients > 0 {
            ingredients.push_str(&format!(" ...and {} more", card.hidden_ingredients));
        }
        lines.push(format!("  {ingredients}"));
    }

    if let Some(preview) = &card.notes_preview {
        lines.push(format!("  {preview}"));
    }

    lines.join("\n")
}

/// Plain-text detail view for `recipes show`.
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = format!("{}\n{}\n", recipe.name, "=".repeat(recipe.name.chars().count()));
    out.push_str(&format!("Category: {}\n", recipe.category));
    if recipe.cooking_time > 0 {
        out.push_str(&format!("Cooking time: {} min\n", recipe.cooking_time));
    } else {
        out.push_str("Cooking time: not set\n");
    }
    out.push_str(&format!("Servings: {}\n", recipe.servings));

    if !recipe.ingredients.is_empty() {
        out.push_str("\nIngredients:\n");
        for ingredient in &recipe.ingredients {
            out.push_str(&format!("  - {ingredient}\n"));
        }
    }

    if !recipe.instructions.is_empty() {
        out.push_str("\nInstructions:\n");
        for (index, step) in recipe.instructions.iter().enumerate() {
            out.push_str(&format!("  {}. {step}\n", index + 1));
        }
    }

    if !recipe.notes.is_empty() {
        out.push_str(&format!("\nNotes:\n  {}\n", recipe.notes));
    }
    if recipe.image.is_some() {
        out.push_str("\n(has image)\n");
    }

    out.push_str(&format!("\nCreated {}", recipe.created_at));
    if let Some(updated_at) = &recipe.updated_at {
        out.push_str(&format!(", updated {updated_at}"));
    }
    out
}

pub struct TerminalSeasoningPresenter {
    rendering: Rendering,
}

impl TerminalSeasoningPresenter {
    pub fn new(rendering: Rendering) -> Self {
        Self { rendering }
    }

    pub fn render(&self, view: &SeasoningView<'_>) -> String {
        let mut out = String::new();
        if self.rendering == Rendering::Silent {
            return out;
        }

        if self.rendering == Rendering::Listing {
            if view.rows.is_empty() {
                out.push_str(view.empty_message());
                out.push('\n');
            }
            for row in &view.rows {
                out.push_str(&format_row(row));
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&format_statistics(&view.statistics));
        out.push('\n');
        out
    }
}

impl SeasoningPresenter for TerminalSeasoningPresenter {
    fn show_seasonings(&self, view: &SeasoningView<'_>) {
        print!("{}", self.render(view));
    }
}

fn format_row(row: &SeasoningRow<'_>) -> String {
    let seasoning = row.seasoning;
    let mut line = format!(
        "{:<8} {}  [{}]\n  {} | expires {} ({})",
        row.status.as_str(),
        seasoning.name,
        seasoning.id,
        seasoning.category,
        seasoning.expiry_date,
        row.days_text,
    );

    let level = match row.quantity_level {
        QuantityLevel::Low => " (low)",
        QuantityLevel::Medium => " (medium)",
        QuantityLevel::Normal => "",
    };
    line.push_str(&format!(" | {}% left{level}", seasoning.quantity));

    if let Some(opened) = seasoning.opened_date {
        line.push_str(&format!(" | opened {opened}"));
    }
    if !seasoning.location.is_empty() {
        line.push_str(&format!(" | {}", seasoning.location));
    }
    if !seasoning.notes.is_empty() {
        line.push_str(&format!("\n  {}", seasoning.notes));
    }
    line
}

pub fn format_statistics(stats: &ExpiryStatistics) -> String {
    format!(
        "Expired: {}  Expiring soon: {}  Safe: {}  Total: {}",
        stats.expired, stats.warning, stats.safe, stats.total
    )
}
