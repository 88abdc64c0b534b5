mod api_interfaces;
mod api_key;
pub mod client;
pub mod constants;
pub mod error;
pub mod geocode;
pub mod photo;
pub mod places;

pub use api_key::ApiKey;
pub use client::Client;
pub use geocode::Coordinate;
pub use places::Place;
