//! High-level client — `GradeJsClient`.
//!
//! One method per API operation. Each builds its path, query and body, then
//! delegates to the shared dispatcher in [`GradeJsHttp`].

use crate::domain::{Batch, PackageInfoParams, WebPageScanParams};
use crate::error::SdkError;
use crate::http::GradeJsHttp;
use crate::payload::Payload;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

const PING_PATH: &str = "/";
const WEB_PAGE_SCAN_PATH: &str = "/client/getOrRequestWebPageScan";
const PACKAGE_INFO_PATH: &str = "/client/getPackageInfo";
const SHOWCASE_PATH: &str = "/client/getShowcase";

/// The primary entry point for the GradeJS SDK.
///
/// Cloning is cheap and every clone shares the same session: calls may run
/// concurrently, and [`close`](Self::close) on any clone closes all of them.
#[derive(Debug, Clone)]
pub struct GradeJsClient {
    pub(crate) http: GradeJsHttp,
}

impl GradeJsClient {
    /// Create a client for the default API URL.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    pub fn builder() -> GradeJsClientBuilder {
        GradeJsClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Check that the server and the API respond.
    pub async fn ping(&self) -> Result<Payload, SdkError> {
        Ok(self.http.get(PING_PATH).await?)
    }

    /// Get the scan of a web page, requesting one if it does not exist yet.
    pub async fn get_or_request_web_page_scan(&self, url: &str) -> Result<Payload, SdkError> {
        self.get_or_request_web_page_scan_with(WebPageScanParams::new(url))
            .await
    }

    pub async fn get_or_request_web_page_scan_with(
        &self,
        params: WebPageScanParams,
    ) -> Result<Payload, SdkError> {
        let path = format!("{}?batch={}", WEB_PAGE_SCAN_PATH, params.batch);
        let body = Batch::new(params.input());
        Ok(self.http.post(&path, &body).await?)
    }

    /// Get information about an npm package.
    pub async fn get_package_info(&self, package: &str) -> Result<Payload, SdkError> {
        self.get_package_info_with(PackageInfoParams::new(package))
            .await
    }

    pub async fn get_package_info_with(
        &self,
        params: PackageInfoParams,
    ) -> Result<Payload, SdkError> {
        // GET carries no body, so the batch envelope travels in `input`.
        let input = Batch::new(params.input()).to_query_json()?;
        let path = format!(
            "{}?batch={}&input={}",
            PACKAGE_INFO_PATH,
            params.batch,
            urlencoding::encode(&input)
        );
        Ok(self.http.get(&path).await?)
    }

    /// Get the showcase of featured scans and packages.
    pub async fn get_showcase(&self) -> Result<Payload, SdkError> {
        Ok(self.http.get(SHOWCASE_PATH).await?)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Release the session. Further calls fail with
    /// [`HttpError::Closed`](crate::error::HttpError::Closed). Idempotent.
    pub async fn close(&self) {
        self.http.close().await;
    }

    pub async fn is_closed(&self) -> bool {
        self.http.is_closed().await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct GradeJsClientBuilder {
    base_url: String,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
}

impl Default for GradeJsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            user_agent: None,
            headers: Vec::new(),
        }
    }
}

impl GradeJsClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<GradeJsClient, SdkError> {
        let mut headers = HeaderMap::new();

        if let Some(ua) = &self.user_agent {
            let value = HeaderValue::from_str(ua)
                .map_err(|e| SdkError::Validation(format!("Invalid user agent '{}': {}", ua, e)))?;
            headers.insert(USER_AGENT, value);
        }

        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| SdkError::Validation(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SdkError::Validation(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(crate::error::HttpError::from)?;

        Ok(GradeJsClient {
            http: GradeJsHttp::new(&self.base_url, client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = GradeJsClient::new().unwrap();
        assert_eq!(client.base_url(), "https://api.gradejs.com");
    }

    #[test]
    fn test_builder_overrides() {
        let client = GradeJsClient::builder()
            .base_url("http://localhost:8080")
            .user_agent("gradejs-sdk-test")
            .header("X-Custom", "test")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_rejects_bad_header_name() {
        let err = GradeJsClient::builder()
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref msg) if msg.contains("bad header")));
    }

    #[test]
    fn test_builder_rejects_bad_header_value() {
        let err = GradeJsClient::builder()
            .header("X-Custom", "line\nbreak")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_builder_accepts_malformed_base_url() {
        // Resolution errors surface on the first request, not at build time.
        let client = GradeJsClient::builder().base_url("::nope::").build().unwrap();
        assert_eq!(client.base_url(), "::nope::");
    }

    #[tokio::test]
    async fn test_clones_share_session() {
        let client = GradeJsClient::new().unwrap();
        let other = client.clone();
        other.close().await;
        assert!(client.is_closed().await);

        let err = client.get_showcase().await.unwrap_err();
        assert!(err.is_closed());
    }
}
