//! # GradeJS SDK
//!
//! An async Rust client for the GradeJS API: web page scans, npm package
//! information and the public showcase.
//!
//! ## Architecture
//!
//! 1. **Core** — Domain types, payloads, errors (always available, WASM-safe)
//! 2. **HTTP** — `GradeJsHttp`: closable shared session + request dispatcher
//! 3. **Client** — `GradeJsClient` with one method per API operation
//!
//! Every operation returns a [`Payload`](payload::Payload): the parsed JSON
//! value when the body is JSON, the raw text otherwise.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gradejs_sdk::prelude::*;
//!
//! let client = GradeJsClient::new()?;
//!
//! println!("Ping: {}", client.ping().await?);
//! let scan = client.get_or_request_web_page_scan("https://github.com/").await?;
//! let axios = client.get_package_info("axios").await?;
//!
//! client.close().await;
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Request-side domain types: batch envelope, scan and package parameters.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// JSON-or-text response payloads.
pub mod payload;

// ── HTTP ─────────────────────────────────────────────────────────────────────

/// Shared session and request dispatcher.
#[cfg(feature = "http")]
pub mod http;

// ── Client ───────────────────────────────────────────────────────────────────

/// `GradeJsClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::domain::{Batch, PackageInfoParams, WebPageScanParams, DEFAULT_BATCH};
    pub use crate::error::{HttpError, SdkError};
    pub use crate::network::DEFAULT_API_URL;
    pub use crate::payload::Payload;

    #[cfg(feature = "http")]
    pub use crate::client::{GradeJsClient, GradeJsClientBuilder};
}
