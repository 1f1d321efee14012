pub mod pagination;

pub use pagination::{total_pages, PagePosition, PaginationParams};
