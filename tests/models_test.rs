//! Serde model tests for the remote service DTOs
//!
//! Fixtures mirror the shape of real responses from each service.

use fitpal::modules::places::dto::PlacesNearbyResponse;
use fitpal::modules::recipes::infrastructure::external::edamam::dto::EdamamSearchResponse;
use fitpal::modules::translation::dto::{TranslateRequest, TranslateResponse};
use fitpal::modules::weather::dto::OpenWeatherResponse;

#[test]
fn edamam_response_deserializes() {
    let json = r#"{
        "q": "recipe",
        "from": 0,
        "to": 10,
        "count": 25,
        "hits": [
            {
                "recipe": {
                    "uri": "http://www.edamam.com/ontologies/edamam.owl#recipe_a1",
                    "label": "Poulet rôti",
                    "image": "https://example.com/poulet.jpg",
                    "calories": 846.2,
                    "ingredientLines": ["1 whole chicken", "2 tbsp butter"],
                    "totalWeight": 1200.5
                }
            }
        ]
    }"#;

    let response: EdamamSearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.count, 25);
    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.hits[0].recipe.label, "Poulet rôti");
    assert_eq!(response.hits[0].recipe.ingredient_lines.len(), 2);
}

#[test]
fn edamam_optional_fields_may_be_absent() {
    let json = r#"{
        "count": 1,
        "hits": [
            {
                "recipe": {
                    "uri": "http://www.edamam.com/ontologies/edamam.owl#recipe_a2",
                    "label": "Plain bread"
                }
            }
        ]
    }"#;

    let response: EdamamSearchResponse = serde_json::from_str(json).unwrap();
    let recipe = &response.hits[0].recipe;
    assert!(recipe.image.is_none());
    assert!(recipe.calories.is_none());
    assert!(recipe.ingredient_lines.is_empty());
}

#[test]
fn edamam_empty_hits_deserialize() {
    let json = r#"{"count": 0, "hits": []}"#;
    let response: EdamamSearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.count, 0);
    assert!(response.hits.is_empty());
}

#[test]
fn translate_request_serializes_the_batch() {
    let request = TranslateRequest {
        q: vec!["Roast chicken".to_string(), "Fish".to_string()],
        target: "fr".to_string(),
        format: "text".to_string(),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["q"][0], "Roast chicken");
    assert_eq!(json["q"][1], "Fish");
    assert_eq!(json["target"], "fr");
    assert_eq!(json["format"], "text");
}

#[test]
fn translate_response_preserves_order() {
    let json = r#"{
        "data": {
            "translations": [
                {"translatedText": "Poulet rôti"},
                {"translatedText": "Poisson"}
            ]
        }
    }"#;

    let response: TranslateResponse = serde_json::from_str(json).unwrap();
    let texts: Vec<&str> = response
        .data
        .translations
        .iter()
        .map(|t| t.translated_text.as_str())
        .collect();
    assert_eq!(texts, vec!["Poulet rôti", "Poisson"]);
}

#[test]
fn weather_response_deserializes() {
    let json = r#"{
        "coord": {"lon": -73.59, "lat": 45.51},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": 18.4, "feels_like": 17.9, "temp_min": 16.1, "temp_max": 20.0, "pressure": 1016, "humidity": 72},
        "wind": {"speed": 3.6, "deg": 220},
        "name": "Montreal"
    }"#;

    let response: OpenWeatherResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.weather[0].main, "Clouds");
    assert_eq!(response.main.temp, 18.4);
    assert_eq!(response.main.humidity, 72);
    assert_eq!(response.wind.unwrap().speed, 3.6);
    assert_eq!(response.name, "Montreal");
}

#[test]
fn places_response_deserializes() {
    let json = r#"{
        "html_attributions": [],
        "results": [
            {
                "place_id": "ChIJabc123",
                "name": "Downtown Gym",
                "vicinity": "123 Main St",
                "geometry": {"location": {"lat": 45.5017, "lng": -73.5673}},
                "types": ["gym", "health", "point_of_interest"],
                "rating": 4.4
            }
        ],
        "status": "OK"
    }"#;

    let response: PlacesNearbyResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.status, "OK");
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].name, "Downtown Gym");
    assert_eq!(response.results[0].geometry.location.lat, 45.5017);
    assert_eq!(response.results[0].types[0], "gym");
}

#[test]
fn places_zero_results_has_no_results_array_entries() {
    let json = r#"{"html_attributions": [], "results": [], "status": "ZERO_RESULTS"}"#;
    let response: PlacesNearbyResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.status, "ZERO_RESULTS");
    assert!(response.results.is_empty());
    assert!(response.error_message.is_none());
}
