use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    api_interfaces::{check_status, geocode},
    constants::DEFAULT_GEOCODE_URL,
    error::GetError,
    ApiKey,
};

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Resolve a free-form address to the coordinate of the first candidate.
///
/// A response without candidates is reported as [`GetError::NoCandidates`].
pub async fn get(
    client: &Client,
    key: &ApiKey,
    address: &str,
    endpoint: Option<&str>,
) -> Result<Coordinate, GetError> {
    let response = client
        .get(endpoint.unwrap_or(DEFAULT_GEOCODE_URL))
        .query(&[("address", address), ("key", key.get())])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(GetError::ResponseError(response.status()));
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let parsed_body: geocode::Response = serde_json::from_str(&body)?;
    check_status(
        parsed_body.status.as_deref(),
        parsed_body.error_message.as_deref(),
    )?;
    debug!(candidates = parsed_body.results.len(), "geocode response");
    let candidate = parsed_body
        .results
        .into_iter()
        .next()
        .ok_or(GetError::NoCandidates)?;
    Ok(Coordinate {
        lat: candidate.geometry.location.lat,
        lng: candidate.geometry.location.lng,
    })
}
