use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::time::Duration;

/// Common HTTP response handler for all service clients
/// Eliminates duplicate status handling code
pub struct HttpHandler;

impl HttpHandler {
    /// Create an HTTP client with consistent configuration
    pub fn create_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Handle HTTP response status codes consistently across all services
    pub fn check_status(status: StatusCode, service_name: &str) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "{} rate limit exceeded",
                service_name
            ))),
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {} API",
                service_name
            ))),
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized(format!(
                "Unauthorized access to {} API",
                service_name
            ))),
            StatusCode::FORBIDDEN => Err(AppError::Unauthorized(format!(
                "Access forbidden to {} API",
                service_name
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable",
                service_name
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                service_name, status
            ))),
        }
    }
}
