use super::label_normalizer;
use crate::modules::recipes::domain::Recipe;

/// Narrow the already-loaded page to the labels matching a search query.
///
/// Pure and synchronous: an empty query returns the full page, otherwise a
/// recipe is visible when its normalized, lowercased label starts with the
/// normalized, lowercased query. Runs on every keystroke; never re-fetches.
pub fn filter_recipes(items: &[Recipe], query: &str) -> Vec<Recipe> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = label_normalizer::filter_key(query);
    items
        .iter()
        .filter(|recipe| label_normalizer::filter_key(&recipe.label).starts_with(&needle))
        .cloned()
        .collect()
}
