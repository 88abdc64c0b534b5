use reqwest::StatusCode;
use tracing::warn;

use crate::{address::ServiceError, messages, response::ResponseBuilder, ResponseEnvelope};

use super::missing_permissions;

/// Turn an address service failure into speech. A 403 means the user revoked
/// or never granted the permission.
pub fn handle(error: &ServiceError) -> ResponseEnvelope {
    warn!(status = error.status_code, message = %error.message, "address service error");
    if error.status_code == StatusCode::FORBIDDEN.as_u16() {
        return missing_permissions();
    }
    ResponseBuilder::new()
        .speak(messages::LOCATION_FAILURE)
        .reprompt(messages::LOCATION_FAILURE)
        .build()
}
