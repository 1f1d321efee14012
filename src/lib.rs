//! Service core for a fitness and food companion app.
//!
//! Everything the app's screens do besides rendering lives here: the
//! paginated recipe browsing pipeline (fetch, accent-insensitive sort, batch
//! label translation with graceful degradation, local starts-with filtering),
//! recipe detail localization, current-weather lookup, and nearby sports
//! venue / equipment store discovery. All of it is orchestration of remote
//! services; nothing is persisted.

pub mod modules;
pub mod shared;

pub use modules::places::{Place, PlacesClient};
pub use modules::recipes::{
    BrowseState, EdamamClient, PageLoad, Recipe, RecipeBrowseService, RecipeDetailService,
};
pub use modules::translation::{GoogleTranslateClient, TranslationOutcome};
pub use modules::weather::{CurrentWeather, WeatherClient, WeatherCondition};
pub use shared::config::ApiConfig;
pub use shared::errors::{AppError, AppResult};
