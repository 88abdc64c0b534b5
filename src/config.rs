use std::time::Duration;

use bb_maps::{
    client::{ClientInitError, EndpointConfig},
    ApiKey,
};
use clap::Args;

/// Process settings shared by the binaries.
#[derive(Args, Clone, Debug)]
pub struct Settings {
    #[arg(
        short = 'k',
        long,
        help = "Maps API key. If not provided, API_KEY is read from the environment on each lookup."
    )]
    pub api_key: Option<String>,

    #[arg(
        long,
        env = "BB_HTTP_TIMEOUT_SECS",
        default_value_t = 10,
        help = "Timeout for each outbound HTTP request, in seconds."
    )]
    pub http_timeout_secs: u64,

    #[arg(
        long,
        env = "BB_LOOKUP_TIMEOUT_SECS",
        default_value_t = 25,
        help = "Deadline for the whole address, geocode and search chain, in seconds."
    )]
    pub lookup_timeout_secs: u64,

    #[arg(long, env = "BB_GEOCODE_ENDPOINT", help = "Geocoding endpoint override.")]
    pub geocode_endpoint: Option<String>,

    #[arg(
        long,
        env = "BB_NEARBY_SEARCH_ENDPOINT",
        help = "Nearby search endpoint override."
    )]
    pub nearby_search_endpoint: Option<String>,

    #[arg(long, env = "BB_PHOTO_ENDPOINT", help = "Photo endpoint override.")]
    pub photo_endpoint: Option<String>,
}

impl Settings {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(self.http_timeout())
            .build()
    }

    pub fn endpoints(&self) -> EndpointConfig {
        EndpointConfig {
            geocode: self.geocode_endpoint.clone(),
            nearby_search: self.nearby_search_endpoint.clone(),
            photo: self.photo_endpoint.clone(),
        }
    }

    pub fn maps_client(&self, http: reqwest::Client) -> Result<bb_maps::Client, ClientInitError> {
        bb_maps::Client::new(
            http,
            Some(self.endpoints()),
            self.api_key.as_deref().map(ApiKey::from_raw),
        )
    }
}
