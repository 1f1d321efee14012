use serde::{Deserialize, Serialize};

use super::dto::PlaceResult;

/// Place types that count as a sports venue on the home screen
const VENUE_TYPES: [&str; 3] = ["gym", "park", "stadium"];

/// A nearby place as shown on the map and in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub types: Vec<String>,
    pub rating: Option<f64>,
}

impl Place {
    /// Handoff URL opening turn-by-turn directions in the maps application
    pub fn directions_url(&self) -> String {
        directions_url(self.latitude, self.longitude)
    }
}

pub fn directions_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        latitude, longitude
    )
}

pub struct PlacesMapper;

impl PlacesMapper {
    pub fn to_domain(dto: PlaceResult) -> Place {
        Place {
            place_id: dto.place_id,
            name: dto.name,
            vicinity: dto.vicinity,
            latitude: dto.geometry.location.lat,
            longitude: dto.geometry.location.lng,
            types: dto.types,
            rating: dto.rating,
        }
    }

    /// Keep only the results typed as an actual sports venue
    pub fn is_sports_venue(place: &Place) -> bool {
        place
            .types
            .iter()
            .any(|t| VENUE_TYPES.contains(&t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(types: &[&str]) -> Place {
        Place {
            place_id: "pid-1".to_string(),
            name: "Test place".to_string(),
            vicinity: Some("1 Test St".to_string()),
            latitude: 45.5,
            longitude: -73.6,
            types: types.iter().map(|t| t.to_string()).collect(),
            rating: None,
        }
    }

    #[test]
    fn venue_filter_accepts_gym_park_and_stadium() {
        assert!(PlacesMapper::is_sports_venue(&place(&["gym", "establishment"])));
        assert!(PlacesMapper::is_sports_venue(&place(&["park"])));
        assert!(PlacesMapper::is_sports_venue(&place(&["stadium", "point_of_interest"])));
    }

    #[test]
    fn venue_filter_rejects_everything_else() {
        assert!(!PlacesMapper::is_sports_venue(&place(&["restaurant"])));
        assert!(!PlacesMapper::is_sports_venue(&place(&[])));
        // No substring matching: "gymnasium" is not "gym"
        assert!(!PlacesMapper::is_sports_venue(&place(&["gymnasium"])));
    }

    #[test]
    fn directions_url_embeds_the_destination() {
        assert_eq!(
            directions_url(45.5, -73.6),
            "https://www.google.com/maps/dir/?api=1&destination=45.5,-73.6"
        );
        assert_eq!(place(&["gym"]).directions_url(), directions_url(45.5, -73.6));
    }
}
