use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: tenancy_config::ConfigError,
    },

    #[error("Auth info error: {source}")]
    AuthInfo {
        #[source]
        source: tenancy_core::CoreError,
    },

    #[error("IO error reading {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid arguments: {message} {location}")]
    InvalidArguments {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON serialization error: {source} {location}")]
    Json {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        CliError::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn invalid_arguments<S: Into<String>>(message: S) -> Self {
        CliError::InvalidArguments {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        CliError::Json {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<tenancy_config::ConfigError> for CliError {
    fn from(source: tenancy_config::ConfigError) -> Self {
        CliError::Config { source }
    }
}

impl From<tenancy_core::CoreError> for CliError {
    fn from(source: tenancy_core::CoreError) -> Self {
        CliError::AuthInfo { source }
    }
}

pub type CliErrorResult<T> = std::result::Result<T, CliError>;
