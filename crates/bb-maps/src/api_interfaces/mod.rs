pub mod geocode;
pub mod places;

use crate::{constants::OK_STATUSES, error::GetError};

/// Google reports most failures with a 200 and a non-OK `status` field.
pub fn check_status(status: Option<&str>, error_message: Option<&str>) -> Result<(), GetError> {
    match status {
        Some(status) if !OK_STATUSES.contains(&status) => Err(GetError::ApiStatus {
            status: status.to_string(),
            message: error_message.unwrap_or_default().to_string(),
        }),
        _ => Ok(()),
    }
}
