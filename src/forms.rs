//! Raw form text to validated record input.
//!
//! Numeric fields never fail: anything unparsable falls back to a named
//! default. Only missing required fields and malformed dates are errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Recipe, RecipeInput, Seasoning, SeasoningInput};

pub const DEFAULT_COOKING_TIME: u32 = 0;
pub const DEFAULT_SERVINGS: u32 = 1;
pub const DEFAULT_QUANTITY: i64 = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

/// Split multi-line text into entries, dropping blank lines and keeping order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

/// Parse the leading whole number of `text` ("30 min" is 30, "1.5" is 1),
/// or fall back to `default` when there are no leading digits.
pub fn parse_or_default<T: std::str::FromStr>(text: &str, default: T) -> T {
    leading_integer(text).parse().unwrap_or(default)
}

/// Like [`parse_or_default`], but zero also means "use the default".
fn parse_nonzero_or_default<T>(text: &str, default: T) -> T
where
    T: std::str::FromStr + PartialEq + Default,
{
    match leading_integer(text).parse::<T>() {
        Ok(value) if value != T::default() => value,
        _ => default,
    }
}

/// Optional sign followed by the ASCII digits that start `text`.
fn leading_integer(text: &str) -> &str {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['-', '+']));
    let digits = text[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    &text[..sign + digits]
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Recipe form fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeForm {
    pub name: String,
    pub category: String,
    pub cooking_time: String,
    pub servings: String,
    /// One ingredient per line.
    pub ingredients: String,
    /// One step per line.
    pub instructions: String,
    pub notes: String,
}

impl RecipeForm {
    /// Prefill from an existing record, as the edit dialog shows it.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            cooking_time: recipe.cooking_time.to_string(),
            servings: recipe.servings.to_string(),
            ingredients: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.join("\n"),
            notes: recipe.notes.clone(),
        }
    }

    pub fn to_input(&self, image: Option<String>) -> Result<RecipeInput, FormError> {
        Ok(RecipeInput {
            name: required(&self.name, "name")?,
            category: required(&self.category, "category")?,
            cooking_time: parse_or_default(&self.cooking_time, DEFAULT_COOKING_TIME),
            servings: parse_nonzero_or_default(&self.servings, DEFAULT_SERVINGS),
            ingredients: split_lines(&self.ingredients),
            instructions: split_lines(&self.instructions),
            notes: self.notes.trim().to_string(),
            image,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasoningForm {
    pub name: String,
    pub category: String,
    pub expiry_date: String,
    /// Empty when the seasoning hasn't been opened.
    pub opened_date: String,
    pub quantity: String,
    pub location: String,
    pub notes: String,
}

impl Default for SeasoningForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            expiry_date: String::new(),
            opened_date: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            location: String::new(),
            notes: String::new(),
        }
    }
}

impl SeasoningForm {
    pub fn from_seasoning(seasoning: &Seasoning) -> Self {
        Self {
            name: seasoning.name.clone(),
            category: seasoning.category.clone(),
            expiry_date: seasoning.expiry_date.format(DATE_FORMAT).to_string(),
            opened_date: seasoning
                .opened_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            quantity: seasoning.quantity.to_string(),
            location: seasoning.location.clone(),
            notes: seasoning.notes.clone(),
        }
    }

    pub fn to_input(&self) -> Result<SeasoningInput, FormError> {
        let name = required(&self.name, "name")?;
        let category = required(&self.category, "category")?;
        let expiry_date = parse_date(&required(&self.expiry_date, "expiry date")?, "expiry date")?;
        let opened_date = if self.opened_date.trim().is_empty() {
            None
        } else {
            Some(parse_date(&self.opened_date, "opened date")?)
        };

        Ok(SeasoningInput {
            name,
            category,
            expiry_date,
            opened_date,
            quantity: parse_or_default(&self.quantity, DEFAULT_QUANTITY),
            location: self.location.trim().to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}
