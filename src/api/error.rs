//! Error types for API operations.

use http::StatusCode;
use thiserror::Error;

use crate::transport::HttpError;

/// Error type for API operations.
///
/// `Request`, `Decode` and `EmptyBody` are request errors: the call did not
/// yield a usable payload. `Server` means the service answered with a status
/// other than 200, whatever the body contained.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or its response could not be read.
    #[error("HTTP request to {endpoint} failed: {source}")]
    Request {
        /// Endpoint path
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },

    /// The response body is not valid JSON for the expected type.
    #[error("Cannot parse response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path
        endpoint: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The response body held no JSON value.
    #[error("Empty response from {endpoint}")]
    EmptyBody {
        /// Endpoint path
        endpoint: String,
    },

    /// The service returned a non-200 status.
    #[error("Request returned error {status}")]
    Server {
        /// Endpoint path
        endpoint: String,
        /// HTTP status returned
        status: StatusCode,
    },
}

impl ApiError {
    /// Returns true for transport and decoding failures.
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Request { .. } | Self::Decode { .. } | Self::EmptyBody { .. }
        )
    }

    /// Returns the HTTP status for server errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the endpoint path the failed call targeted.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Request { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::EmptyBody { endpoint }
            | Self::Server { endpoint, .. } => endpoint,
        }
    }
}
