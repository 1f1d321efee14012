use serde::{Deserialize, Serialize};

/// A single recipe as shown in the browsing list.
///
/// Created by the search mapper, relabeled in place by translation, and
/// discarded when the next page loads. The `uri` is the stable identity
/// used as the list key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub uri: String,
    pub label: String,
    pub calories: Option<f64>,
    pub image: Option<String>,
    pub ingredient_lines: Vec<String>,
}

/// One fixed-size window of remote search results plus the server-reported
/// total count across all windows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePage {
    pub items: Vec<Recipe>,
    pub total_count: u64,
}

impl RecipePage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
