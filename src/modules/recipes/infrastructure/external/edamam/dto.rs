use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdamamSearchResponse {
    pub count: u64,
    pub from: Option<u32>,
    pub to: Option<u32>,
    pub hits: Vec<EdamamHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdamamHit {
    pub recipe: EdamamRecipe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdamamRecipe {
    pub uri: String,
    pub label: String,
    pub image: Option<String>,
    pub calories: Option<f64>,
    #[serde(rename = "ingredientLines", default)]
    pub ingredient_lines: Vec<String>,
}
