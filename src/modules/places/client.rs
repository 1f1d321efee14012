use crate::shared::config::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::HttpHandler;
use reqwest::Client;

use super::dto::PlacesNearbyResponse;
use super::mapper::{Place, PlacesMapper};

/// Search radius around the user, in meters
const NEARBY_RADIUS_M: u32 = 5000;

/// Keywords for open sports venues (filtered further by place type)
const SPORTS_KEYWORDS: &str = "gym, sports complex, outdoor gym, public sports facilities";

/// Keywords for equipment shopping
const EQUIPMENT_KEYWORDS: &str = "sporting goods store";

pub struct PlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(api_key: String) -> AppResult<Self> {
        let client = HttpHandler::create_client(30, "FitPal/1.0")?;

        Ok(Self {
            client,
            base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::new(config.google_api_key.clone())
    }

    /// Nearby gyms, parks, and stadiums for the home screen.
    ///
    /// The keyword search casts a wide net; only results carrying one of the
    /// venue place types are kept.
    pub async fn nearby_sports_venues(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<Vec<Place>> {
        let places = self
            .nearby_search(latitude, longitude, SPORTS_KEYWORDS)
            .await?;

        Ok(places
            .into_iter()
            .filter(PlacesMapper::is_sports_venue)
            .collect())
    }

    /// Nearby sporting-goods stores for the store screen
    pub async fn nearby_equipment_stores(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<Vec<Place>> {
        self.nearby_search(latitude, longitude, EQUIPMENT_KEYWORDS)
            .await
    }

    async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        keywords: &str,
    ) -> AppResult<Vec<Place>> {
        let url = format!(
            "{}/nearbysearch/json?location={},{}&radius={}&keyword={}&key={}",
            self.base_url,
            latitude,
            longitude,
            NEARBY_RADIUS_M,
            urlencoding::encode(keywords),
            self.api_key
        );

        log::debug!(
            "Searching places near ({}, {}) for '{}'",
            latitude,
            longitude,
            keywords
        );

        let response = self.client.get(&url).send().await?;
        HttpHandler::check_status(response.status(), "Google Places")?;

        let nearby_response = response.json::<PlacesNearbyResponse>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse Google Places response: {}", e))
        })?;

        match nearby_response.status.as_str() {
            "OK" => Ok(nearby_response
                .results
                .into_iter()
                .map(PlacesMapper::to_domain)
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            status => Err(AppError::ApiError(format!(
                "Google Places returned status {}: {}",
                status,
                nearby_response.error_message.unwrap_or_default()
            ))),
        }
    }
}
