use crate::modules::recipes::domain::{Recipe, RecipePage};

use super::dto::{EdamamHit, EdamamSearchResponse};

pub struct EdamamMapper;

impl EdamamMapper {
    pub fn to_domain(dto: EdamamSearchResponse) -> RecipePage {
        RecipePage {
            total_count: dto.count,
            items: dto.hits.into_iter().map(Self::map_recipe).collect(),
        }
    }

    fn map_recipe(hit: EdamamHit) -> Recipe {
        Recipe {
            uri: hit.recipe.uri,
            label: hit.recipe.label,
            calories: hit.recipe.calories,
            image: hit.recipe.image,
            ingredient_lines: hit.recipe.ingredient_lines,
        }
    }
}
