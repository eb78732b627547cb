//! Response payloads.
//!
//! The API does not negotiate a content type, so every body is read as text
//! and then speculatively parsed as JSON. [`Payload`] keeps both outcomes
//! explicit instead of handing back a loosely typed value.

use serde::{Serialize, Serializer};
use std::fmt;

/// A response body: parsed JSON when the text is valid JSON, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

impl Payload {
    /// Parse a response body, falling back to the exact text on failure.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Payload::Json(value),
            Err(e) => {
                tracing::debug!(error = %e, "Response body is not JSON, keeping raw text");
                Payload::Text(body)
            }
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }

    /// Consume the payload, returning the JSON value if there is one.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Serializes untagged: JSON as-is, text as a JSON string.
impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Json(value) => value.serialize(serializer),
            Payload::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Json(value) => write!(f, "{}", value),
            Payload::Text(text) => f.write_str(text),
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}
