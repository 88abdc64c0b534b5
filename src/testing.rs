//! Fakes shared by handler and dispatcher tests.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use bb_maps::{error::GetError, Coordinate, Place};
use serde_json::json;

use crate::{
    address::{Address, AddressError, AddressRequest, AddressService, ServiceError},
    envelope::RequestEnvelope,
    lookup::DinerFinder,
};

pub fn envelope_for(
    request_type: &str,
    intent: Option<&str>,
    consent_token: Option<&str>,
    display: bool,
) -> RequestEnvelope {
    let mut request = json!({ "type": request_type, "requestId": "amzn1.echo-api.request.1" });
    if let Some(name) = intent {
        request["intent"] = json!({ "name": name, "confirmationStatus": "NONE" });
    }
    let mut user = json!({ "userId": "amzn1.ask.account.1" });
    if let Some(token) = consent_token {
        user["permissions"] = json!({ "consentToken": token });
    }
    let interfaces = if display {
        json!({ "Display": { "templateVersion": "1.0", "markupVersion": "1.0" } })
    } else {
        json!({})
    };
    serde_json::from_value(json!({
        "version": "1.0",
        "context": {
            "System": {
                "user": user,
                "device": { "deviceId": "amzn1.ask.device.1", "supportedInterfaces": interfaces },
                "apiEndpoint": "https://api.amazonalexa.com",
                "apiAccessToken": "access-token"
            }
        },
        "request": request
    }))
    .unwrap()
}

pub fn diner(name: &str) -> Place {
    Place {
        name: name.to_string(),
        rating: Some(4.5),
        price_level: Some(1),
        location_code: "84VVJM9P+WC".to_string(),
        photo_references: vec![format!(
            "{}-photo",
            name.to_lowercase().replace(' ', "-")
        )],
    }
}

pub enum ScriptedAddress {
    Found(Address),
    ServiceError(u16),
    Malformed,
    Hang,
}

pub struct FakeAddress {
    script: ScriptedAddress,
    pub calls: Arc<AtomicUsize>,
}

impl FakeAddress {
    pub fn new(script: ScriptedAddress) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl AddressService for FakeAddress {
    async fn full_address(&self, _request: &AddressRequest<'_>) -> Result<Address, AddressError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            ScriptedAddress::Found(address) => Ok(address.clone()),
            ScriptedAddress::ServiceError(status_code) => Err(ServiceError {
                status_code: *status_code,
                message: "scripted failure".to_string(),
            }
            .into()),
            ScriptedAddress::Malformed => {
                Err(serde_json::from_str::<Address>("not json").unwrap_err().into())
            }
            ScriptedAddress::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(Address::default())
            }
        }
    }
}

enum ScriptedFinder {
    Found(Place),
    Ungeocodable,
    Empty,
    Broken,
}

pub struct FakeFinder {
    script: ScriptedFinder,
    pub located: Arc<Mutex<Option<String>>>,
    pub locate_calls: Arc<AtomicUsize>,
    pub search_calls: Arc<AtomicUsize>,
}

impl FakeFinder {
    fn new(script: ScriptedFinder) -> Self {
        Self {
            script,
            located: Arc::new(Mutex::new(None)),
            locate_calls: Arc::new(AtomicUsize::new(0)),
            search_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn found(place: Place) -> Self {
        Self::new(ScriptedFinder::Found(place))
    }

    /// Geocoding yields no candidates.
    pub fn ungeocodable() -> Self {
        Self::new(ScriptedFinder::Ungeocodable)
    }

    /// The nearby search yields no candidates.
    pub fn empty() -> Self {
        Self::new(ScriptedFinder::Empty)
    }

    /// Geocoding fails outright.
    pub fn broken() -> Self {
        Self::new(ScriptedFinder::Broken)
    }
}

#[async_trait]
impl DinerFinder for FakeFinder {
    async fn locate(&self, address: &str) -> Result<Coordinate, GetError> {
        self.locate_calls.fetch_add(1, Ordering::SeqCst);
        *self.located.lock().unwrap() = Some(address.to_string());
        match self.script {
            ScriptedFinder::Ungeocodable => Err(GetError::NoCandidates),
            ScriptedFinder::Broken => Err(GetError::ApiStatus {
                status: "UNKNOWN_ERROR".to_string(),
                message: "scripted failure".to_string(),
            }),
            _ => Ok(Coordinate {
                lat: 47.6223,
                lng: -122.3366,
            }),
        }
    }

    async fn nearby_diner(&self, _location: Coordinate) -> Result<Place, GetError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            ScriptedFinder::Found(place) => Ok(place.clone()),
            _ => Err(GetError::NoCandidates),
        }
    }

    fn photo_url(&self, width: u32, reference: &str) -> Result<String, GetError> {
        Ok(format!("photo/{width}/{reference}"))
    }
}
