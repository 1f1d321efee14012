use crate::modules::recipes::domain::RecipePage;
use crate::modules::recipes::traits::RecipeSearchProvider;
use crate::shared::application::pagination::PaginationParams;
use crate::shared::config::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::HttpHandler;
use async_trait::async_trait;
use reqwest::Client;

use super::dto::EdamamSearchResponse;
use super::mapper::EdamamMapper;

/// Items per page requested from the search endpoint
pub const PAGE_SIZE: u32 = 10;

/// Fixed remote search term; the user's free-text query only filters locally
const SEARCH_TERM: &str = "recipe";

pub struct EdamamClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl EdamamClient {
    pub fn new(app_id: String, app_key: String) -> AppResult<Self> {
        let client = HttpHandler::create_client(30, "FitPal/1.0")?;

        Ok(Self {
            client,
            base_url: "https://api.edamam.com".to_string(),
            app_id,
            app_key,
        })
    }

    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::new(config.edamam_app_id.clone(), config.edamam_app_key.clone())
    }

    /// Fetch the `[from, to)` result window for a 1-based page number.
    ///
    /// A non-success response or network failure is an error; a success with
    /// zero hits is a valid, empty page.
    pub async fn search_page(&self, page: u32) -> AppResult<RecipePage> {
        if page < 1 {
            return Err(AppError::InvalidInput(
                "Page numbers are 1-based".to_string(),
            ));
        }

        let (from, to) = PaginationParams::new(page, PAGE_SIZE).window();
        let url = format!("{}/search", self.base_url);

        log::debug!("Fetching recipe page {} (window {}..{})", page, from, to);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", SEARCH_TERM.to_string()),
                ("app_id", self.app_id.clone()),
                ("app_key", self.app_key.clone()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ])
            .send()
            .await?;

        HttpHandler::check_status(response.status(), "Edamam")?;

        let search_response = response
            .json::<EdamamSearchResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Edamam response: {}", e)))?;

        Ok(EdamamMapper::to_domain(search_response))
    }
}

#[async_trait]
impl RecipeSearchProvider for EdamamClient {
    async fn search_page(&self, page: u32) -> AppResult<RecipePage> {
        self.search_page(page).await
    }

    fn page_size(&self) -> u32 {
        PAGE_SIZE
    }
}
