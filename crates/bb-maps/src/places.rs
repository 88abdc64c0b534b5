use derive_builder::Builder;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    api_interfaces::{check_status, places},
    constants::{DEFAULT_NEARBY_SEARCH_URL, MAX_CANDIDATES},
    error::GetError,
    ApiKey, Coordinate,
};

/// A place eligible for recommendation: it has a location code to search for
/// and at least one photo to show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    pub location_code: String,
    pub photo_references: Vec<String>,
}

impl Place {
    /// The first non-empty photo reference, if the place has one.
    pub fn primary_photo(&self) -> Option<&str> {
        self.photo_references
            .iter()
            .map(String::as_str)
            .find(|reference| !reference.is_empty())
    }

    fn from_result(result: places::PlaceResult) -> Option<Self> {
        let location_code = result
            .plus_code
            .map(|code| code.global_code)
            .or(result.vicinity)
            .filter(|code| !code.trim().is_empty())?;
        let photo_references: Vec<String> = result
            .photos
            .into_iter()
            .map(|photo| photo.photo_reference)
            .filter(|reference| !reference.is_empty())
            .collect();
        if photo_references.is_empty() {
            return None;
        }
        Some(Self {
            name: result.name,
            rating: result.rating,
            price_level: result.price_level,
            location_code,
            photo_references,
        })
    }
}

/// Parameters of a nearby search. Results are always ranked by distance.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct NearbySearch {
    location: Coordinate,
    #[builder(default = "\"restaurant\".to_string()", setter(into))]
    place_type: String,
    #[builder(default = "\"diner\".to_string()", setter(into))]
    keyword: String,
    #[builder(default = "true")]
    open_now: bool,
}

impl NearbySearch {
    /// Open diners around `location`.
    pub fn open_diners(location: Coordinate) -> Result<Self, GetError> {
        Ok(NearbySearchBuilder::default().location(location).build()?)
    }

    fn to_query(&self, key: &ApiKey) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("location", self.location.to_string()),
            ("rankby", "distance".to_string()),
            ("type", self.place_type.clone()),
            ("keyword", self.keyword.clone()),
        ];
        if self.open_now {
            query.push(("opennow", "true".to_string()));
        }
        query.push(("key", key.get().to_string()));
        query
    }
}

/// Run a nearby search and return the eligible places among the first
/// [`MAX_CANDIDATES`] results, nearest first.
pub async fn search(
    client: &Client,
    key: &ApiKey,
    search: &NearbySearch,
    endpoint: Option<&str>,
) -> Result<Vec<Place>, GetError> {
    let response = client
        .get(endpoint.unwrap_or(DEFAULT_NEARBY_SEARCH_URL))
        .query(&search.to_query(key))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(GetError::ResponseError(response.status()));
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let parsed_body: places::Response = serde_json::from_str(&body)?;
    check_status(
        parsed_body.status.as_deref(),
        parsed_body.error_message.as_deref(),
    )?;
    let total = parsed_body.results.len();
    let places: Vec<Place> = parsed_body
        .results
        .into_iter()
        .take(MAX_CANDIDATES)
        .filter_map(Place::from_result)
        .collect();
    debug!(total, eligible = places.len(), "nearby search response");
    Ok(places)
}

/// Pick one place uniformly at random among the first `min(20, len)` entries.
pub fn choose<R: Rng + ?Sized>(places: Vec<Place>, rng: &mut R) -> Result<Place, GetError> {
    let mut candidates: Vec<Place> = places.into_iter().take(MAX_CANDIDATES).collect();
    if candidates.is_empty() {
        return Err(GetError::NoCandidates);
    }
    let index = rng.random_range(0..candidates.len());
    Ok(candidates.swap_remove(index))
}
