/// Pagination support for remote queries
///
/// Standard pagination model used across all modules
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Zero-based offset of the first item on this page
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }

    /// Half-open `[from, to)` window requested from the remote API
    pub fn window(&self) -> (u32, u32) {
        let from = self.offset();
        (from, from + self.page_size)
    }
}

/// Total number of pages for a server-reported result count
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    ((total_count as f64) / (page_size as f64)).ceil() as u32
}

/// Where the current page sits relative to the first and last page.
///
/// Derived purely from the current page number and the total page count.
/// A single-page (or empty) result set reports `AtFirstPage`; both
/// transitions are disabled there, so callers deciding whether a move is
/// allowed should ask `can_go_next`/`can_go_previous` on the state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePosition {
    AtFirstPage,
    Middle,
    AtLastPage,
}

impl PagePosition {
    pub fn derive(current_page: u32, total_pages: u32) -> Self {
        if current_page <= 1 {
            PagePosition::AtFirstPage
        } else if current_page >= total_pages {
            PagePosition::AtLastPage
        } else {
            PagePosition::Middle
        }
    }
}
