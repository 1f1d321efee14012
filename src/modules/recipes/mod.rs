pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use application::{
    BrowseState, LocalizedRecipe, PageLoad, RecipeBrowseService, RecipeDetailService,
};
pub use domain::{Recipe, RecipePage};
pub use infrastructure::external::edamam::{EdamamClient, PAGE_SIZE};
