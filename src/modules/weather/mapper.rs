use serde::{Deserialize, Serialize};

use super::dto::OpenWeatherResponse;

/// The condition groups the home screen distinguishes between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Other,
}

impl WeatherCondition {
    /// Case-insensitive mapping from the provider's condition group
    pub fn from_group(group: &str) -> Self {
        match group.to_lowercase().as_str() {
            "clear" => WeatherCondition::Clear,
            "clouds" => WeatherCondition::Clouds,
            "rain" => WeatherCondition::Rain,
            "snow" => WeatherCondition::Snow,
            "thunderstorm" => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Other,
        }
    }
}

/// Current weather at the user's location, metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub condition: WeatherCondition,
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_percent: u32,
    pub wind_speed_ms: Option<f64>,
    pub city: String,
}

pub struct WeatherMapper;

impl WeatherMapper {
    pub fn to_domain(dto: OpenWeatherResponse) -> CurrentWeather {
        let (condition, description) = dto
            .weather
            .first()
            .map(|entry| {
                (
                    WeatherCondition::from_group(&entry.main),
                    entry.description.clone(),
                )
            })
            .unwrap_or((WeatherCondition::Other, String::new()));

        CurrentWeather {
            condition,
            description,
            temperature_c: dto.main.temp,
            feels_like_c: dto.main.feels_like,
            humidity_percent: dto.main.humidity,
            wind_speed_ms: dto.wind.map(|w| w.speed),
            city: dto.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::dto::{WeatherEntry, WeatherMain, WeatherWind};
    use super::*;

    #[test]
    fn condition_mapping_is_case_insensitive() {
        assert_eq!(WeatherCondition::from_group("Clear"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_group("CLOUDS"), WeatherCondition::Clouds);
        assert_eq!(WeatherCondition::from_group("rain"), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_group("Snow"), WeatherCondition::Snow);
        assert_eq!(
            WeatherCondition::from_group("Thunderstorm"),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_group("Mist"), WeatherCondition::Other);
    }

    #[test]
    fn maps_the_first_condition_entry() {
        let dto = OpenWeatherResponse {
            weather: vec![WeatherEntry {
                main: "Clouds".to_string(),
                description: "broken clouds".to_string(),
            }],
            main: WeatherMain {
                temp: 18.4,
                feels_like: 17.9,
                humidity: 72,
            },
            wind: Some(WeatherWind { speed: 3.6 }),
            name: "Montreal".to_string(),
        };

        let weather = WeatherMapper::to_domain(dto);
        assert_eq!(weather.condition, WeatherCondition::Clouds);
        assert_eq!(weather.description, "broken clouds");
        assert_eq!(weather.temperature_c, 18.4);
        assert_eq!(weather.wind_speed_ms, Some(3.6));
        assert_eq!(weather.city, "Montreal");
    }

    #[test]
    fn missing_condition_entry_maps_to_other() {
        let dto = OpenWeatherResponse {
            weather: vec![],
            main: WeatherMain {
                temp: 0.0,
                feels_like: -3.0,
                humidity: 80,
            },
            wind: None,
            name: "Nowhere".to_string(),
        };

        let weather = WeatherMapper::to_domain(dto);
        assert_eq!(weather.condition, WeatherCondition::Other);
        assert!(weather.description.is_empty());
        assert_eq!(weather.wind_speed_ms, None);
    }
}
