//! Expiry classification, ordering and statistics for seasonings.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Seasoning;

/// Days before expiry during which a seasoning counts as "expiring soon".
pub const WARNING_WINDOW_DAYS: i64 = 30;

pub const EMPTY_SEASONINGS_MESSAGE: &str =
    "No seasonings yet. Add one to start tracking expiry dates.";
pub const EMPTY_FILTER_MESSAGE: &str = "No seasonings match this filter.";

/// Whole calendar days from `today` to `expiry`; negative once expired.
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryStatus {
    Expired,
    Warning,
    Safe,
}

impl ExpiryStatus {
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            ExpiryStatus::Expired
        } else if days <= WARNING_WINDOW_DAYS {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Safe => "safe",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable remaining time.
pub fn remaining_days_text(days: i64) -> String {
    match days {
        d if d < 0 => format!("{} days ago expired", d.abs()),
        0 => "expires today".to_string(),
        1 => "expires tomorrow".to_string(),
        d => format!("in {d} days"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantityLevel {
    Low,
    Medium,
    Normal,
}

impl QuantityLevel {
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity <= 25 {
            QuantityLevel::Low
        } else if quantity <= 50 {
            QuantityLevel::Medium
        } else {
            QuantityLevel::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ExpiryStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: ExpiryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryStatistics {
    pub expired: usize,
    pub warning: usize,
    pub safe: usize,
    pub total: usize,
}

/// What the post-load / post-edit expiry check should tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryAlert {
    Expired(usize),
    ExpiringSoon(usize),
}

impl ExpiryStatistics {
    pub fn compute(seasonings: &[Seasoning], today: NaiveDate) -> Self {
        let mut stats = Self {
            total: seasonings.len(),
            ..Self::default()
        };

        for seasoning in seasonings {
            match ExpiryStatus::from_days(days_until_expiry(seasoning.expiry_date, today)) {
                ExpiryStatus::Expired => stats.expired += 1,
                ExpiryStatus::Warning => stats.warning += 1,
                ExpiryStatus::Safe => stats.safe += 1,
            }
        }

        stats
    }

    /// Expired items take priority over ones that merely expire soon.
    pub fn alert(&self) -> Option<ExpiryAlert> {
        if self.expired > 0 {
            Some(ExpiryAlert::Expired(self.expired))
        } else if self.warning > 0 {
            Some(ExpiryAlert::ExpiringSoon(self.warning))
        } else {
            None
        }
    }
}

/// One seasoning as the list view shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasoningRow<'a> {
    pub seasoning: &'a Seasoning,
    pub days: i64,
    pub status: ExpiryStatus,
    pub days_text: String,
    pub quantity_level: QuantityLevel,
}

impl<'a> SeasoningRow<'a> {
    pub fn new(seasoning: &'a Seasoning, today: NaiveDate) -> Self {
        let days = days_until_expiry(seasoning.expiry_date, today);
        Self {
            seasoning,
            days,
            status: ExpiryStatus::from_days(days),
            days_text: remaining_days_text(days),
            quantity_level: QuantityLevel::from_quantity(seasoning.quantity),
        }
    }
}

/// Filtered, sorted rows plus statistics over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasoningView<'a> {
    pub rows: Vec<SeasoningRow<'a>>,
    pub filter: StatusFilter,
    pub statistics: ExpiryStatistics,
}

impl SeasoningView<'_> {
    pub fn empty_message(&self) -> &'static str {
        match self.filter {
            StatusFilter::All => EMPTY_SEASONINGS_MESSAGE,
            StatusFilter::Only(_) => EMPTY_FILTER_MESSAGE,
        }
    }
}

/// Apply `filter`, then order soonest-expiring first. Equal days keep store
/// order (the sort is stable).
pub fn seasoning_rows<'a>(
    seasonings: &'a [Seasoning],
    filter: StatusFilter,
    today: NaiveDate,
) -> Vec<SeasoningRow<'a>> {
    let mut rows: Vec<_> = seasonings
        .iter()
        .map(|seasoning| SeasoningRow::new(seasoning, today))
        .filter(|row| filter.admits(row.status))
        .collect();
    rows.sort_by_key(|row| row.days);
    rows
}

pub fn seasoning_view<'a>(
    seasonings: &'a [Seasoning],
    filter: StatusFilter,
    today: NaiveDate,
) -> SeasoningView<'a> {
    SeasoningView {
        rows: seasoning_rows(seasonings, filter, today),
        filter,
        statistics: ExpiryStatistics::compute(seasonings, today),
    }
}
