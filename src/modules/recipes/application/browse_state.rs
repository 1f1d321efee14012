use crate::modules::recipes::domain::services::recipe_filter;
use crate::modules::recipes::domain::Recipe;
use crate::shared::application::pagination::{self, PagePosition};

/// In-memory state of the recipe browsing screen, owned by the caller.
///
/// Holds the currently loaded page, the derived pagination bounds, and the
/// free-text query with its filtered view. `filtered` is always a subset of
/// `items` by `uri` and is recomputed in full whenever `items` or the query
/// changes. Session-only; `reset` returns to the pristine page-1 state.
#[derive(Debug, Clone)]
pub struct BrowseState {
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    query: String,
    items: Vec<Recipe>,
    filtered: Vec<Recipe>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            query: String::new(),
            items: Vec::new(),
            filtered: Vec::new(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The full current page
    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    /// The visible subset of the current page for the current query
    pub fn filtered(&self) -> &[Recipe] {
        &self.filtered
    }

    pub fn position(&self) -> PagePosition {
        PagePosition::derive(self.current_page, self.total_pages)
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Update the search query and recompute the visible subset.
    ///
    /// Synchronous and total: the filtered view is never left half-updated.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    /// Return to the pristine state (page 1, nothing loaded, empty query)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn apply_page(
        &mut self,
        page: u32,
        items: Vec<Recipe>,
        total_count: u64,
        page_size: u32,
    ) {
        self.current_page = page;
        self.total_count = total_count;
        self.total_pages = pagination::total_pages(total_count, page_size);
        self.items = items;
        self.refilter();
    }

    pub(crate) fn apply_empty(&mut self, page: u32, total_count: u64, page_size: u32) {
        self.apply_page(page, Vec::new(), total_count, page_size);
    }

    fn refilter(&mut self) {
        self.filtered = recipe_filter::filter_recipes(&self.items, &self.query);
    }
}
