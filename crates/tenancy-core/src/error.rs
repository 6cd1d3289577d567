use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to decode auth info: {source} {location}")]
    AuthInfoDecode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid auth info field '{field}': {message} {location}")]
    InvalidAuthInfo {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Wrap a JSON decode failure with the caller's location
    #[track_caller]
    pub fn auth_info_decode(source: serde_json::Error) -> Self {
        Self::AuthInfoDecode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_auth_info<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self::InvalidAuthInfo {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
