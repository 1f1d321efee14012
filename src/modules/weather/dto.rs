use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
    pub main: WeatherMain,
    pub wind: Option<WeatherWind>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherEntry {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherWind {
    pub speed: f64,
}
