use crate::shared::errors::{AppError, AppResult};

/// Credentials and fixed settings for the remote services the app talks to.
///
/// Loaded once at startup from the environment (a `.env` file is honored in
/// development) and passed explicitly to the clients that need it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub edamam_app_id: String,
    pub edamam_app_key: String,
    pub google_api_key: String,
    pub openweather_api_key: String,
    /// Target language for label translation (BCP-47 code).
    pub target_lang: String,
}

impl ApiConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            edamam_app_id: require_env("EDAMAM_APP_ID")?,
            edamam_app_key: require_env("EDAMAM_APP_KEY")?,
            google_api_key: require_env("GOOGLE_API_KEY")?,
            openweather_api_key: require_env("OPENWEATHER_API_KEY")?,
            target_lang: std::env::var("FITPAL_TARGET_LANG").unwrap_or_else(|_| "fr".to_string()),
        })
    }
}

fn require_env(key: &str) -> AppResult<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigError(format!(
            "{} environment variable not set",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_a_config_error() {
        let result = require_env("FITPAL_TEST_DOES_NOT_EXIST");
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn present_variable_is_returned() {
        std::env::set_var("FITPAL_TEST_PRESENT", "value");
        assert_eq!(require_env("FITPAL_TEST_PRESENT").unwrap(), "value");
        std::env::remove_var("FITPAL_TEST_PRESENT");
    }
}
