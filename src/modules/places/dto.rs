use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesNearbyResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub geometry: PlaceGeometry,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}
