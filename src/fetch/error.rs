//! Errors raised while fetching the catalog.
//!
//! Every variant is terminal for the session. The UI shows the same fixed
//! message for all of them and logs `details()` for diagnosis.

use thiserror::Error;

/// Message shown in place of the card grid when the catalog can't be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Could not fetch books";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("HTTP error, status: {status}")]
    Status { status: u16 },

    /// Transport failure (DNS, TLS, connection reset, body read)
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Body is not valid JSON
    #[error("Response is not valid JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Body is JSON but not an array of book records
    #[error("Unexpected catalog shape: {message}")]
    DataShape { message: String },
}

impl FetchError {
    /// User-facing message for display.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        self.to_string()
    }

    /// Short machine-friendly kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Client { .. } => "client",
            FetchError::Status { .. } => "status",
            FetchError::Connection { .. } => "connection",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Decode { .. } => "decode",
            FetchError::DataShape { .. } => "data_shape",
        }
    }
}
