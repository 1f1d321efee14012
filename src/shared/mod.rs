pub mod application; // Shared application layer patterns
pub mod config; // Environment-backed service configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (HTTP, logging)

pub use config::ApiConfig;
