//! Recipe records.
//!
//! The JSON shape (camelCase keys, `image: null`, `updatedAt` omitted until
//! the first edit) is what the `recipes` slot holds.

use serde::{Deserialize, Serialize};

use crate::{store::Record, utils::Clock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Minutes; 0 means "not set".
    #[serde(default)]
    pub cooking_time: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// Embedded image as a `data:` URI.
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_servings() -> u32 {
    1
}

/// Validated field values for creating or editing a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInput {
    pub name: String,
    pub category: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: String,
    /// `None` keeps whatever image the record already has.
    pub image: Option<String>,
}

impl Record for Recipe {
    type Input = RecipeInput;

    const SLOT: &'static str = "recipes";
    const NOUN: &'static str = "recipe";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: RecipeInput, created_at: String) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            cooking_time: input.cooking_time,
            servings: input.servings,
            ingredients: input.ingredients,
            instructions: input.instructions,
            notes: input.notes,
            image: input.image,
            created_at,
            updated_at: None,
        }
    }

    fn merge(&mut self, input: RecipeInput, updated_at: String) {
        self.name = input.name;
        self.category = input.category;
        self.cooking_time = input.cooking_time;
        self.servings = input.servings;
        self.ingredients = input.ingredients;
        self.instructions = input.instructions;
        self.notes = input.notes;
        if let Some(image) = input.image {
            self.image = Some(image);
        }
        self.updated_at = Some(updated_at);
    }

    /// Recipes carry a plain calendar date, e.g. `2026/10/9`.
    fn stamp(clock: &dyn Clock) -> String {
        clock.today().format("%Y/%-m/%-d").to_string()
    }
}
