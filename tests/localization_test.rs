//! Tests for recipe detail localization and the share message

use std::sync::Arc;

use async_trait::async_trait;
use fitpal::modules::recipes::domain::Recipe;
use fitpal::modules::translation::TranslationProvider;
use fitpal::shared::errors::{AppError, AppResult};
use fitpal::RecipeDetailService;

struct PrefixTranslator;

#[async_trait]
impl TranslationProvider for PrefixTranslator {
    async fn translate_batch(&self, texts: &[String]) -> AppResult<Vec<String>> {
        Ok(texts.iter().map(|t| format!("FR:{}", t)).collect())
    }
}

struct FailingTranslator;

#[async_trait]
impl TranslationProvider for FailingTranslator {
    async fn translate_batch(&self, _texts: &[String]) -> AppResult<Vec<String>> {
        Err(AppError::ExternalServiceError(
            "translation service unavailable".to_string(),
        ))
    }
}

fn roast_chicken() -> Recipe {
    Recipe {
        uri: "uri:roast-chicken".to_string(),
        label: "Roast chicken".to_string(),
        calories: Some(846.2),
        image: Some("https://example.com/poulet.jpg".to_string()),
        ingredient_lines: vec!["1 whole chicken".to_string(), "2 tbsp butter".to_string()],
    }
}

#[tokio::test]
async fn label_and_ingredients_are_spliced_positionally() {
    let service = RecipeDetailService::new(Arc::new(PrefixTranslator));
    let localized = service.localize(&roast_chicken()).await.unwrap();

    assert_eq!(localized.recipe.label, "FR:Roast chicken");
    assert_eq!(
        localized.recipe.ingredient_lines,
        vec![
            "FR:1 whole chicken".to_string(),
            "FR:2 tbsp butter".to_string()
        ]
    );
    // Everything else carries over untouched
    assert_eq!(localized.recipe.uri, "uri:roast-chicken");
    assert_eq!(localized.recipe.calories, Some(846.2));
}

#[tokio::test]
async fn recipe_without_ingredients_still_localizes() {
    let mut recipe = roast_chicken();
    recipe.ingredient_lines.clear();

    let service = RecipeDetailService::new(Arc::new(PrefixTranslator));
    let localized = service.localize(&recipe).await.unwrap();
    assert_eq!(localized.recipe.label, "FR:Roast chicken");
    assert!(localized.recipe.ingredient_lines.is_empty());
}

#[tokio::test]
async fn translation_failure_surfaces_as_an_error() {
    let service = RecipeDetailService::new(Arc::new(FailingTranslator));
    let result = service.localize(&roast_chicken()).await;
    assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
}

#[tokio::test]
async fn share_text_lists_label_ingredients_and_extras() {
    let service = RecipeDetailService::new(Arc::new(PrefixTranslator));
    let localized = service.localize(&roast_chicken()).await.unwrap();

    let text = localized.share_text();
    assert!(text.starts_with("Check out this recipe: FR:Roast chicken"));
    assert!(text.contains("Ingredients:\nFR:1 whole chicken\nFR:2 tbsp butter"));
    assert!(text.contains("Calories: 846"));
    assert!(text.contains("Image: https://example.com/poulet.jpg"));
}

#[tokio::test]
async fn share_text_skips_missing_calories_and_image() {
    let mut recipe = roast_chicken();
    recipe.calories = None;
    recipe.image = None;

    let service = RecipeDetailService::new(Arc::new(PrefixTranslator));
    let localized = service.localize(&recipe).await.unwrap();

    let text = localized.share_text();
    assert!(!text.contains("Calories:"));
    assert!(!text.contains("Image:"));
}
