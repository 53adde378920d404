//! Error types for the MessageBird request dispatcher
//!
//! Two outcomes are specific to the dispatcher: an unsupported method string
//! (rejected before any network call) and a status code outside the
//! allow-list. Everything else wraps a lower layer.

use messagebird_transport::TransportError;
use thiserror::Error;

/// Result type alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the MessageBird client.
#[derive(Debug, Error)]
pub enum Error {
    /// The method string is not one of `GET`, `DELETE`, `PATCH`, `POST`, `PUT`.
    #[error("{0} is not a supported HTTP method")]
    UnsupportedMethod(String),

    /// The response status is not in the allow-list.
    #[error("{message}")]
    HttpTransport {
        /// HTTP status code
        status: u16,
        /// Diagnostic message, e.g. `500 Server Error: Internal Server Error for url: ...`
        message: String,
    },

    /// The endpoint and path did not resolve to a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request parameters could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// I/O error, e.g. the blocking runtime could not start.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),
}

impl Error {
    /// Build the error for a status outside the allow-list.
    ///
    /// The message names the status class, the canonical reason and the URL.
    pub fn from_status(status: u16, reason: &str, url: &str) -> Self {
        let class = match status {
            400..=499 => "Client Error",
            500..=599 => "Server Error",
            _ => "Unexpected Status",
        };

        Error::HttpTransport {
            status,
            message: format!("{} {}: {} for url: {}", status, class, reason, url),
        }
    }

    /// Status code carried by an [`Error::HttpTransport`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpTransport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
