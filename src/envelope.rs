//! The subset of the inbound request envelope the skill reads.

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub context: Context,
    pub request: Request,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: SystemState,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    pub device: Option<Device>,
    pub user: Option<User>,
    pub api_endpoint: Option<String>,
    pub api_access_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    #[serde(default)]
    pub supported_interfaces: SupportedInterfaces,
}

/// Interfaces the requesting surface supports. Only presence matters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedInterfaces {
    #[serde(rename = "Display")]
    pub display: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    pub permissions: Option<Permissions>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub consent_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "IntentRequest")]
    Intent { intent: Intent },
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded {
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read the file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("unable to parse the envelope: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl RequestEnvelope {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file_contents = tokio::fs::read_to_string(path).await?;
        Ok(Self::from_json(&file_contents)?)
    }

    /// Name of the dispatched intent, if this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        match &self.request {
            Request::Intent { intent } => Some(intent.name.as_str()),
            _ => None,
        }
    }

    pub fn consent_token(&self) -> Option<&str> {
        self.context
            .system
            .user
            .as_ref()
            .and_then(|user| user.permissions.as_ref())
            .and_then(|permissions| permissions.consent_token.as_deref())
            .filter(|token| !token.is_empty())
    }

    pub fn device_id(&self) -> Option<&str> {
        self.context
            .system
            .device
            .as_ref()
            .map(|device| device.device_id.as_str())
    }

    pub fn supports_display(&self) -> bool {
        self.context
            .system
            .device
            .as_ref()
            .is_some_and(|device| device.supported_interfaces.display.is_some())
    }
}
