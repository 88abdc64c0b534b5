use thiserror::Error;
use tracing::info;

use crate::{
    error::GetError,
    geocode,
    photo,
    places::{self, NearbySearch},
    ApiKey, Coordinate, Place,
};

#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    endpoints: Option<EndpointConfig>,
    api_key: Option<ApiKey>,
}

/// Overrides for the service base URLs. Query parameters are appended by the
/// client, so overrides must not carry a query string.
#[derive(Clone, Debug, Default)]
pub struct EndpointConfig {
    pub geocode: Option<String>,
    pub nearby_search: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum EndpointConfigError {
    #[error("empty url for endpoint {0}")]
    EmptyUrl(String),
    #[error("endpoint {0} must not carry a query string (url: {1})")]
    UnexpectedQuery(String, String),
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), EndpointConfigError> {
        let endpoints = [
            ("geocode", &self.geocode),
            ("nearby_search", &self.nearby_search),
            ("photo", &self.photo),
        ];
        for (name, url) in endpoints {
            let Some(url) = url else { continue };
            if url.trim().is_empty() {
                return Err(EndpointConfigError::EmptyUrl(name.to_string()));
            }
            if url.contains('?') {
                return Err(EndpointConfigError::UnexpectedQuery(
                    name.to_string(),
                    url.clone(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid endpoint configuration: {0}")]
    InvalidEndpointConfig(#[from] EndpointConfigError),
}

impl Client {
    /// Without an `api_key`, the key is read from the environment on every lookup.
    pub fn new(
        http_client: reqwest::Client,
        endpoints: Option<EndpointConfig>,
        api_key: Option<ApiKey>,
    ) -> Result<Self, ClientInitError> {
        if let Some(endpoints) = &endpoints {
            endpoints.validate()?
        }
        Ok(Self {
            http_client,
            endpoints,
            api_key,
        })
    }

    fn api_key(&self) -> Result<ApiKey, GetError> {
        match &self.api_key {
            Some(key) => Ok(key.clone()),
            None => ApiKey::from_env(),
        }
    }

    fn endpoints(&self) -> Option<&EndpointConfig> {
        self.endpoints.as_ref()
    }

    /// Resolve a free-form address to a coordinate.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, GetError> {
        let key = self.api_key()?;
        info!("geocoding device address");
        geocode::get(
            &self.http_client,
            &key,
            address,
            self.endpoints().and_then(|e| e.geocode.as_deref()),
        )
        .await
    }

    /// Eligible open diners near `location`, nearest first.
    pub async fn open_diners(&self, location: Coordinate) -> Result<Vec<Place>, GetError> {
        let key = self.api_key()?;
        let search = NearbySearch::open_diners(location)?;
        info!(%location, "searching for open diners");
        places::search(
            &self.http_client,
            &key,
            &search,
            self.endpoints().and_then(|e| e.nearby_search.as_deref()),
        )
        .await
    }

    /// One open diner near `location`, chosen at random among the nearest.
    pub async fn find_open_diner(&self, location: Coordinate) -> Result<Place, GetError> {
        let diners = self.open_diners(location).await?;
        pick(diners)
    }

    pub fn photo_url(&self, width: u32, reference: &str) -> Result<String, GetError> {
        let key = self.api_key()?;
        photo::url(
            width,
            reference,
            &key,
            self.endpoints().and_then(|e| e.photo.as_deref()),
        )
    }
}

fn pick(diners: Vec<Place>) -> Result<Place, GetError> {
    places::choose(diners, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const FAKE_API_KEY: &str = "fake-api-key";

    fn client_for(server: &MockServer) -> Client {
        let endpoints = EndpointConfig {
            geocode: Some(server.url("/geocode")),
            nearby_search: Some(server.url("/nearby")),
            photo: Some(server.url("/photo")),
        };
        Client::new(
            reqwest::Client::new(),
            Some(endpoints),
            Some(ApiKey::from_raw(FAKE_API_KEY)),
        )
        .unwrap()
    }

    #[test]
    fn validate_rejects_empty_url() {
        let endpoints = EndpointConfig {
            geocode: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            endpoints.validate(),
            Err(EndpointConfigError::EmptyUrl("geocode".to_string()))
        );
    }

    #[test]
    fn validate_rejects_query() {
        let endpoints = EndpointConfig {
            photo: Some("http://localhost/photo?key=abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            endpoints.validate(),
            Err(EndpointConfigError::UnexpectedQuery(_, _))
        ));
        let client = Client::new(reqwest::Client::new(), Some(endpoints), None);
        assert!(client.is_err());
    }

    #[test]
    fn photo_url_uses_override() {
        let endpoints = EndpointConfig {
            photo: Some("http://localhost/photo".to_string()),
            ..Default::default()
        };
        let client = Client::new(
            reqwest::Client::new(),
            Some(endpoints),
            Some(ApiKey::from_raw(FAKE_API_KEY)),
        )
        .unwrap();
        assert_eq!(
            client.photo_url(400, "ref").unwrap(),
            "http://localhost/photo?maxwidth=400&photoreference=ref&key=fake-api-key"
        );
    }

    #[tokio::test]
    async fn geocode_then_find_open_diner() {
        // Arrange
        let server = MockServer::start_async().await;
        let geocode_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "results": [{ "geometry": { "location": { "lat": 40.0, "lng": -75.0 } } }]
                }));
            })
            .await;
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/nearby")
                    .query_param("location", "40,-75");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "results": [{
                        "name": "Silk City Diner",
                        "plus_code": { "global_code": "87F6WVX2+XX" },
                        "photos": [{ "photo_reference": "silk" }]
                    }]
                }));
            })
            .await;
        let client = client_for(&server);

        // Act
        let location = client.geocode("435 Spring Garden St Philadelphia, PA").await;
        let diner = client.find_open_diner(location.unwrap()).await;

        // Assert
        assert!(diner.is_ok(), "Failed to find diner: {:?}", diner.unwrap_err());
        assert_eq!(diner.unwrap().name, "Silk City Diner");
        geocode_mock.assert();
        search_mock.assert();
    }

    #[tokio::test]
    async fn find_open_diner_without_results() {
        // Arrange
        let server = MockServer::start_async().await;
        let search_mock = server
            .mock_async(|when, then| {
                when.path("/nearby");
                then.status(200)
                    .json_body(json!({ "status": "ZERO_RESULTS", "results": [] }));
            })
            .await;
        let client = client_for(&server);

        // Act
        let diner = client
            .find_open_diner(Coordinate { lat: 0.0, lng: 0.0 })
            .await;

        // Assert
        assert!(matches!(diner.unwrap_err(), GetError::NoCandidates));
        search_mock.assert();
    }
}
