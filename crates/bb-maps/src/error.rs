use thiserror::Error;

use crate::places::NearbySearchBuilderError;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("no API key is configured")]
    MissingApiKey,
    #[error("unable to build the request: {0}")]
    BuildError(#[from] NearbySearchBuilderError),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the request failed with status code: {0}")]
    ResponseError(reqwest::StatusCode),
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("the service rejected the request ({status}): {message}")]
    ApiStatus { status: String, message: String },
    #[error("the service returned no usable candidates")]
    NoCandidates,
}
