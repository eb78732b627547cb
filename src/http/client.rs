//! Low-level HTTP client — `GradeJsHttp`.
//!
//! Resolves paths against the base URL, performs exactly one round trip per
//! call and hands back the body as a [`Payload`]. No retries, no status code
//! interpretation. Layer 5 (`GradeJsClient`) wraps this.

use crate::error::HttpError;
use crate::http::session::Session;
use crate::payload::Payload;

use reqwest::{Client, Method};
use serde::Serialize;
use url::Url;

/// Low-level HTTP client for the GradeJS API.
#[derive(Debug, Clone)]
pub struct GradeJsHttp {
    base_url: String,
    session: Session,
}

impl GradeJsHttp {
    /// Open a session over `client`. The base URL is validated lazily, on the
    /// first request.
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            session: Session::open(client),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL.
    ///
    /// Standard reference resolution: `/client/x` replaces the base path,
    /// `x` is resolved relative to it, and a query string in `path` is kept.
    pub fn resolve(&self, path: &str) -> Result<Url, HttpError> {
        Ok(Url::parse(&self.base_url)?.join(path)?)
    }

    pub async fn get(&self, path: &str) -> Result<Payload, HttpError> {
        self.dispatch(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Payload, HttpError> {
        self.dispatch(Method::POST, path, Some(body)).await
    }

    /// Send one request and parse the body as JSON, falling back to raw text.
    pub async fn dispatch<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Payload, HttpError> {
        let client = self.session.client().await?;
        let url = self.resolve(path)?;

        tracing::debug!(method = %method, url = %url, "Dispatching request");

        let mut req = client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        Ok(Payload::from_body(text))
    }

    /// Release the session. Safe to call more than once.
    pub async fn close(&self) {
        if self.session.close().await {
            tracing::debug!(base_url = %self.base_url, "Session closed");
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.session.is_closed().await
    }
}
