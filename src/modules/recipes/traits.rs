use crate::modules::recipes::domain::RecipePage;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Port (interface) for remote recipe search providers.
///
/// The free-text query the user types never reaches the provider; a page
/// request only carries the page number, and the provider owns the page size.
#[async_trait]
pub trait RecipeSearchProvider: Send + Sync {
    /// Fetch one fixed-size window of results. `page` is 1-based.
    async fn search_page(&self, page: u32) -> AppResult<RecipePage>;

    /// Number of items per page this provider requests
    fn page_size(&self) -> u32;
}
