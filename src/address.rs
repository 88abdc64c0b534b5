//! Device address lookup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::envelope::RequestEnvelope;

/// Postal address on file for a device. Any field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub city: Option<String>,
    pub district_or_county: Option<String>,
    pub state_or_region: Option<String>,
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl Address {
    /// An address is usable when it has a street line or a region.
    pub fn is_usable(&self) -> bool {
        present(&self.address_line1).is_some() || present(&self.state_or_region).is_some()
    }

    /// `"{line1} {city}, {region} {postal}"` with missing parts left out.
    pub fn location_string(&self) -> String {
        let join = |parts: [Option<&str>; 2]| {
            parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
        };
        let street = join([present(&self.address_line1), present(&self.city)]);
        let locality = join([present(&self.state_or_region), present(&self.postal_code)]);
        match (street.is_empty(), locality.is_empty()) {
            (false, false) => format!("{street}, {locality}"),
            (false, true) => street,
            _ => locality,
        }
    }
}

/// Failure reported by the address service itself, carrying its status code.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("address service returned {status_code}: {message}")]
pub struct ServiceError {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AddressError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("the request envelope is missing {0}")]
    MissingContext(&'static str),
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// What the address service needs to identify the device and authorize the call.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressRequest<'a> {
    pub api_endpoint: &'a str,
    pub api_access_token: &'a str,
    pub device_id: &'a str,
}

impl<'a> AddressRequest<'a> {
    pub fn from_envelope(envelope: &'a RequestEnvelope) -> Result<Self, AddressError> {
        let system = &envelope.context.system;
        Ok(Self {
            api_endpoint: system
                .api_endpoint
                .as_deref()
                .ok_or(AddressError::MissingContext("apiEndpoint"))?,
            api_access_token: system
                .api_access_token
                .as_deref()
                .ok_or(AddressError::MissingContext("apiAccessToken"))?,
            device_id: envelope
                .device_id()
                .ok_or(AddressError::MissingContext("deviceId"))?,
        })
    }
}

#[async_trait]
pub trait AddressService: Send + Sync {
    async fn full_address(&self, request: &AddressRequest<'_>) -> Result<Address, AddressError>;
}

/// Error body the address service sends with a failure status.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DeviceAddressClient {
    http_client: reqwest::Client,
}

impl DeviceAddressClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl AddressService for DeviceAddressClient {
    async fn full_address(&self, request: &AddressRequest<'_>) -> Result<Address, AddressError> {
        let url = format!(
            "{}/v1/devices/{}/settings/address",
            request.api_endpoint.trim_end_matches('/'),
            request.device_id
        );
        let response = self
            .http_client
            .get(url)
            .bearer_auth(request.api_access_token)
            .send()
            .await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(AddressError::ResponseBodyError)?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|error| error.message)
                .unwrap_or_else(|| status.to_string());
            return Err(ServiceError {
                status_code: status.as_u16(),
                message,
            }
            .into());
        }
        if body.trim().is_empty() {
            debug!("address service returned an empty body");
            return Ok(Address::default());
        }
        Ok(serde_json::from_str(&body)?)
    }
}
