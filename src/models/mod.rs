pub mod recipe;
pub mod seasoning;

pub use recipe::{Recipe, RecipeInput};
pub use seasoning::{Seasoning, SeasoningInput};
