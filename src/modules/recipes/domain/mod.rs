mod recipe;
pub mod services;

pub use recipe::{Recipe, RecipePage};
