use gh_client::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// The single failure kind a background fetch reports to its screen.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Remote operation failed: {operation}: {message} {location}")]
    RemoteOperationFailed {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: ClientError,
    },
}

impl FetchError {
    /// Wrap a client error raised by `operation`
    #[track_caller]
    pub fn remote(operation: &'static str, source: ClientError) -> Self {
        FetchError::RemoteOperationFailed {
            operation,
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            FetchError::RemoteOperationFailed { operation, .. } => operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
