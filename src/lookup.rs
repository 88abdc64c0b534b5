//! The maps lookups the find-diner pipeline depends on.

use async_trait::async_trait;
use bb_maps::{error::GetError, Coordinate, Place};

#[async_trait]
pub trait DinerFinder: Send + Sync {
    /// Resolve a free-form address to a coordinate.
    async fn locate(&self, address: &str) -> Result<Coordinate, GetError>;

    /// One open diner near `location`.
    async fn nearby_diner(&self, location: Coordinate) -> Result<Place, GetError>;

    fn photo_url(&self, width: u32, reference: &str) -> Result<String, GetError>;
}

#[async_trait]
impl DinerFinder for bb_maps::Client {
    async fn locate(&self, address: &str) -> Result<Coordinate, GetError> {
        self.geocode(address).await
    }

    async fn nearby_diner(&self, location: Coordinate) -> Result<Place, GetError> {
        self.find_open_diner(location).await
    }

    fn photo_url(&self, width: u32, reference: &str) -> Result<String, GetError> {
        bb_maps::Client::photo_url(self, width, reference)
    }
}
