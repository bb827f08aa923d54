pub mod expiry;
pub mod recipes;

pub use expiry::{
    days_until_expiry, remaining_days_text, seasoning_view, ExpiryAlert, ExpiryStatistics,
    ExpiryStatus, QuantityLevel, SeasoningRow, SeasoningView, StatusFilter,
};
pub use recipes::{filter_recipes, RecipeCard, RecipeQuery};
