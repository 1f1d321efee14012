pub mod places;
pub mod recipes;
pub mod translation;
pub mod weather;
