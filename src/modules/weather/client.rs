use crate::shared::config::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::HttpHandler;
use reqwest::Client;

use super::dto::OpenWeatherResponse;
use super::mapper::{CurrentWeather, WeatherMapper};

pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> AppResult<Self> {
        let client = HttpHandler::create_client(30, "FitPal/1.0")?;

        Ok(Self {
            client,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::new(config.openweather_api_key.clone())
    }

    /// Current weather for a coordinate pair, metric units
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<CurrentWeather> {
        let url = format!("{}/weather", self.base_url);

        log::debug!("Fetching weather for ({}, {})", latitude, longitude);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        HttpHandler::check_status(response.status(), "OpenWeatherMap")?;

        let weather_response = response.json::<OpenWeatherResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse OpenWeatherMap response: {}", e))
        })?;

        Ok(WeatherMapper::to_domain(weather_response))
    }
}
