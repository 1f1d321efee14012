pub mod label_normalizer;
pub mod recipe_filter;
