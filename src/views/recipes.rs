//! Recipe search and card summaries.

use serde::{Deserialize, Serialize};

use crate::models::Recipe;

/// How many ingredients a recipe card lists before collapsing the rest.
pub const CARD_INGREDIENT_LIMIT: usize = 4;
/// Characters of notes shown on a recipe card.
pub const CARD_NOTES_LIMIT: usize = 50;

pub const EMPTY_RECIPES_MESSAGE: &str =
    "No recipes yet. Add your first recipe to get started!";

/// Free-text search plus an optional category. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    pub search: String,
    pub category: String,
}

impl RecipeQuery {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty()
    }

    /// Case-insensitive substring match on name, ingredients or instructions,
    /// combined with an exact category match.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let term = self.search.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&term);

        let matches_search = contains(&recipe.name)
            || recipe.ingredients.iter().any(|item| contains(item))
            || recipe.instructions.iter().any(|step| contains(step));
        let matches_category = self.category.is_empty() || recipe.category == self.category;

        matches_search && matches_category
    }
}

/// Matching recipes in store order.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &RecipeQuery) -> Vec<&'a Recipe> {
    recipes.iter().filter(|recipe| query.matches(recipe)).collect()
}

/// What a recipe card shows in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard<'a> {
    pub recipe: &'a Recipe,
    pub ingredients: &'a [String],
    pub hidden_ingredients: usize,
    pub notes_preview: Option<String>,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        let shown = recipe.ingredients.len().min(CARD_INGREDIENT_LIMIT);
        Self {
            recipe,
            ingredients: &recipe.ingredients[..shown],
            hidden_ingredients: recipe.ingredients.len() - shown,
            notes_preview: notes_preview(&recipe.notes),
        }
    }
}

fn notes_preview(notes: &str) -> Option<String> {
    if notes.is_empty() {
        return None;
    }

    let mut preview: String = notes.chars().take(CARD_NOTES_LIMIT).collect();
    if notes.chars().count() > CARD_NOTES_LIMIT {
        preview.push_str("...");
    }
    Some(preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, category: &str, ingredients: &[&str], instructions: &[&str]) -> Recipe {
        Recipe {
            id: name.to_lowercase(),
            name: name.into(),
            category: category.into(),
            cooking_time: 0,
            servings: 1,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: instructions.iter().map(|s| s.to_string()).collect(),
            notes: String::new(),
            image: None,
            created_at: "2026/10/19".into(),
            updated_at: None,
        }
    }

    fn names(found: Vec<&Recipe>) -> Vec<&str> {
        found.into_iter().map(|recipe| recipe.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_and_ingredients() {
        let recipes = vec![
            recipe("Curry", "main", &["rice", "curry powder"], &[]),
            recipe("Salad", "side", &["lettuce"], &[]),
        ];

        let curry = filter_recipes(&recipes, &RecipeQuery::new("CURRY", ""));
        assert_eq!(names(curry), vec!["Curry"]);

        let rice = filter_recipes(&recipes, &RecipeQuery::new("rice", ""));
        assert_eq!(names(rice), vec!["Curry"]);
    }

    #[test]
    fn search_matches_instructions() {
        let recipes = vec![
            recipe("Soup", "main", &["stock"], &["Simmer gently"]),
            recipe("Toast", "breakfast", &["bread"], &["Toast it"]),
        ];

        let found = filter_recipes(&recipes, &RecipeQuery::new("simmer", ""));
        assert_eq!(names(found), vec!["Soup"]);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let recipes = vec![
            recipe("Curry", "main", &[], &[]),
            recipe("Salad", "side", &[], &[]),
            recipe("Stew", "Main", &[], &[]),
        ];

        let found = filter_recipes(&recipes, &RecipeQuery::new("", "main"));
        assert_eq!(names(found), vec!["Curry"]);
    }

    #[test]
    fn empty_query_keeps_store_order() {
        let recipes = vec![
            recipe("B", "x", &[], &[]),
            recipe("A", "y", &[], &[]),
        ];

        let found = filter_recipes(&recipes, &RecipeQuery::default());
        assert_eq!(names(found), vec!["B", "A"]);
    }

    #[test]
    fn card_collapses_long_ingredient_lists_and_notes() {
        let mut long = recipe("Feast", "main", &["a", "b", "c", "d", "e", "f"], &[]);
        long.notes = "x".repeat(60);

        let card = RecipeCard::new(&long);
        assert_eq!(card.ingredients.len(), 4);
        assert_eq!(card.hidden_ingredients, 2);
        assert_eq!(card.notes_preview.unwrap().len(), 53);

        let short = recipe("Snack", "side", &["a"], &[]);
        let card = RecipeCard::new(&short);
        assert_eq!(card.hidden_ingredients, 0);
        assert_eq!(card.notes_preview, None);
    }
}
