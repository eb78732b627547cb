//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// Status codes are not mapped here: any response body the server sends back
/// is handed to the caller as a [`Payload`](crate::payload::Payload).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Client closed")]
    Closed,
}

impl SdkError {
    /// Whether this error came from using a client after `close()`.
    pub fn is_closed(&self) -> bool {
        matches!(self, SdkError::Http(HttpError::Closed))
    }
}
