use chrono::{NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::{store::Record, utils::Clock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seasoning {
    pub id: String,
    pub name: String,
    pub category: String,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub opened_date: Option<NaiveDate>,
    /// Remaining amount in percent. Values outside 0..=100 are kept as entered.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_quantity() -> i64 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasoningInput {
    pub name: String,
    pub category: String,
    pub expiry_date: NaiveDate,
    pub opened_date: Option<NaiveDate>,
    pub quantity: i64,
    pub location: String,
    pub notes: String,
}

impl Record for Seasoning {
    type Input = SeasoningInput;

    const SLOT: &'static str = "seasonings";
    const NOUN: &'static str = "seasoning";

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: SeasoningInput, created_at: String) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            expiry_date: input.expiry_date,
            opened_date: input.opened_date,
            quantity: input.quantity,
            location: input.location,
            notes: input.notes,
            created_at,
            updated_at: None,
        }
    }

    fn merge(&mut self, input: SeasoningInput, updated_at: String) {
        self.name = input.name;
        self.category = input.category;
        self.expiry_date = input.expiry_date;
        self.opened_date = input.opened_date;
        self.quantity = input.quantity;
        self.location = input.location;
        self.notes = input.notes;
        self.updated_at = Some(updated_at);
    }

    fn stamp(clock: &dyn Clock) -> String {
        clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
