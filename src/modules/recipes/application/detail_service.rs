use std::sync::Arc;

use crate::modules::recipes::domain::Recipe;
use crate::modules::translation::TranslationProvider;
use crate::shared::errors::{AppError, AppResult};

/// A recipe whose label and ingredient lines were translated together.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedRecipe {
    pub recipe: Recipe,
}

impl LocalizedRecipe {
    /// Plain-text share message for the platform share sheet
    pub fn share_text(&self) -> String {
        let mut text = format!(
            "Check out this recipe: {}\n\nIngredients:\n{}",
            self.recipe.label,
            self.recipe.ingredient_lines.join("\n")
        );

        if let Some(calories) = self.recipe.calories {
            text.push_str(&format!("\n\nCalories: {}", calories.round()));
        }
        if let Some(image) = &self.recipe.image {
            text.push_str(&format!("\n\nImage: {}", image));
        }

        text
    }
}

/// Localizes a single recipe for the detail view.
///
/// The label and every ingredient line go out in one batch; element 0 of the
/// result splices back into the label and the rest into the ingredient lines,
/// positionally. Unlike the browsing list, a translation failure here is
/// surfaced to the caller rather than degraded.
pub struct RecipeDetailService {
    translator: Arc<dyn TranslationProvider>,
}

impl RecipeDetailService {
    pub fn new(translator: Arc<dyn TranslationProvider>) -> Self {
        Self { translator }
    }

    pub async fn localize(&self, recipe: &Recipe) -> AppResult<LocalizedRecipe> {
        let mut batch = Vec::with_capacity(1 + recipe.ingredient_lines.len());
        batch.push(recipe.label.clone());
        batch.extend(recipe.ingredient_lines.iter().cloned());

        let mut translated = self.translator.translate_batch(&batch).await?.into_iter();

        let label = translated.next().ok_or_else(|| {
            AppError::ApiError("Translation returned an empty batch".to_string())
        })?;
        let ingredient_lines: Vec<String> = translated.collect();

        if ingredient_lines.len() != recipe.ingredient_lines.len() {
            return Err(AppError::ApiError(format!(
                "Translation returned {} ingredient lines for {}",
                ingredient_lines.len(),
                recipe.ingredient_lines.len()
            )));
        }

        let mut localized = recipe.clone();
        localized.label = label;
        localized.ingredient_lines = ingredient_lines;

        Ok(LocalizedRecipe { recipe: localized })
    }
}
