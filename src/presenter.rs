//! Rendering seams. Controllers push a fresh view through these after every
//! load, filter change and mutation.

use crate::{
    models::Recipe,
    views::{RecipeQuery, SeasoningView},
};

pub trait RecipePresenter {
    /// `recipes` is already filtered by `query`, in display order.
    fn show_recipes(&self, recipes: &[&Recipe], query: &RecipeQuery);
}

pub trait SeasoningPresenter {
    fn show_seasonings(&self, view: &SeasoningView<'_>);
}
