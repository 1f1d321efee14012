mod client;
pub mod dto;
mod mapper;

pub use client::PlacesClient;
pub use mapper::{directions_url, Place, PlacesMapper};
