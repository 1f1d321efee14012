use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::modules::recipes::domain::services::label_normalizer;
use crate::modules::recipes::traits::RecipeSearchProvider;
use crate::modules::translation::{TranslationOutcome, TranslationProvider};
use crate::shared::errors::{AppError, AppResult};

use super::browse_state::BrowseState;

/// Outcome of one page-load pipeline run.
///
/// A fetch failure is an `Err` instead; zero hits is a valid outcome of its
/// own, distinct from an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    Loaded { translation: TranslationOutcome },
    Empty,
}

/// Drives the fetch → sort → translate pipeline for the browsing screen.
///
/// Each user action (initial load, page change, refresh) triggers at most one
/// run; fetch and translation are awaited sequentially since translation
/// needs the fetched labels. Starting a new run cancels the token of the
/// previous one, so a superseded run bails out with `AppError::Cancelled`
/// without touching the state instead of racing it.
pub struct RecipeBrowseService {
    search: Arc<dyn RecipeSearchProvider>,
    translator: Arc<dyn TranslationProvider>,
    active: Mutex<CancellationToken>,
}

impl RecipeBrowseService {
    pub fn new(
        search: Arc<dyn RecipeSearchProvider>,
        translator: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            search,
            translator,
            active: Mutex::new(CancellationToken::new()),
        }
    }

    /// Run the full pipeline for one page and apply the result to `state`.
    ///
    /// On `Err` the state is left exactly as it was, so a fetch failure keeps
    /// the previous page's data displayed next to the error.
    pub async fn load_page(&self, state: &mut BrowseState, page: u32) -> AppResult<PageLoad> {
        if page < 1 {
            return Err(AppError::InvalidInput(
                "Page numbers are 1-based".to_string(),
            ));
        }

        let token = self.begin_run().await;
        log::debug!("Loading recipe page {}", page);

        let fetched = self.search.search_page(page).await?;
        if token.is_cancelled() {
            return Err(AppError::Cancelled(format!("load of page {}", page)));
        }

        let page_size = self.search.page_size();

        if fetched.is_empty() {
            log::info!("Recipe page {} returned no results", page);
            state.apply_empty(page, fetched.total_count, page_size);
            return Ok(PageLoad::Empty);
        }

        let mut items = fetched.items;
        items.sort_by_key(|recipe| label_normalizer::sort_key(&recipe.label));

        let labels: Vec<String> = items.iter().map(|recipe| recipe.label.clone()).collect();
        let translation = match self.translator.translate_batch(&labels).await {
            Ok(translated) if translated.len() == labels.len() => {
                for (recipe, label) in items.iter_mut().zip(translated) {
                    recipe.label = label;
                }
                TranslationOutcome::Translated
            }
            Ok(translated) => {
                log::warn!(
                    "Translation returned {} labels for {} recipes, keeping original labels",
                    translated.len(),
                    labels.len()
                );
                TranslationOutcome::OriginalFallback
            }
            Err(e) => {
                log::warn!("Label translation failed, keeping original labels: {}", e);
                TranslationOutcome::OriginalFallback
            }
        };

        if token.is_cancelled() {
            return Err(AppError::Cancelled(format!("load of page {}", page)));
        }

        state.apply_page(page, items, fetched.total_count, page_size);
        log::info!(
            "Loaded recipe page {}/{} ({} items, {:?})",
            state.current_page(),
            state.total_pages(),
            state.items().len(),
            translation
        );

        Ok(PageLoad::Loaded { translation })
    }

    /// Re-run the pipeline for the page currently shown
    pub async fn refresh(&self, state: &mut BrowseState) -> AppResult<PageLoad> {
        self.load_page(state, state.current_page()).await
    }

    /// Advance one page; a no-op (`Ok(None)`) when already on the last page
    pub async fn next_page(&self, state: &mut BrowseState) -> AppResult<Option<PageLoad>> {
        if !state.can_go_next() {
            return Ok(None);
        }
        let page = state.current_page() + 1;
        self.load_page(state, page).await.map(Some)
    }

    /// Go back one page; a no-op (`Ok(None)`) when already on the first page
    pub async fn previous_page(&self, state: &mut BrowseState) -> AppResult<Option<PageLoad>> {
        if !state.can_go_previous() {
            return Ok(None);
        }
        let page = state.current_page() - 1;
        self.load_page(state, page).await.map(Some)
    }

    /// Cancel the in-flight run, if any, and install a fresh token for this one
    async fn begin_run(&self) -> CancellationToken {
        let mut active = self.active.lock().await;
        active.cancel();
        let token = CancellationToken::new();
        *active = token.clone();
        token
    }
}
