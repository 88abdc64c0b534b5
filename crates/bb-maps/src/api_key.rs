use std::env;

use crate::{constants::API_KEY_ENV, error::GetError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// From a raw API key string.
    pub fn from_raw(key: &str) -> Self {
        Self {
            key: key.to_owned(),
        }
    }

    /// Read the API key from the `API_KEY` environment variable.
    /// Blank values count as missing.
    pub fn from_env() -> Result<Self, GetError> {
        Self::from_var(env::var(API_KEY_ENV).ok())
    }

    fn from_var(value: Option<String>) -> Result<Self, GetError> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(Self { key }),
            _ => Err(GetError::MissingApiKey),
        }
    }

    pub fn get(&self) -> &str {
        &self.key
    }
}
