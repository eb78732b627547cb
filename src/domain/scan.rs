//! Web page scan types.

use crate::domain::batch::DEFAULT_BATCH;
use serde::Serialize;

/// Wire input for `getOrRequestWebPageScan`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebPageScanInput {
    pub url: String,
    pub rescan: bool,
}

/// Parameters for requesting (or fetching an existing) web page scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebPageScanParams {
    /// Page to scan.
    pub url: String,
    /// Force a fresh scan even if one already exists.
    pub rescan: bool,
    /// Value of the `batch` query parameter.
    pub batch: u32,
}

impl WebPageScanParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            rescan: false,
            batch: DEFAULT_BATCH,
        }
    }

    pub fn with_rescan(mut self, rescan: bool) -> Self {
        self.rescan = rescan;
        self
    }

    pub fn with_batch(mut self, batch: u32) -> Self {
        self.batch = batch;
        self
    }

    /// The call wrapped by the batch envelope.
    pub fn input(&self) -> WebPageScanInput {
        WebPageScanInput {
            url: self.url.clone(),
            rescan: self.rescan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Batch;
    use serde_json::json;

    #[test]
    fn test_params_defaults() {
        let params = WebPageScanParams::new("https://example.com/");
        assert_eq!(params.url, "https://example.com/");
        assert!(!params.rescan);
        assert_eq!(params.batch, 1);
    }

    #[test]
    fn test_params_builder() {
        let params = WebPageScanParams::new("https://example.com/")
            .with_rescan(true)
            .with_batch(3);
        assert!(params.rescan);
        assert_eq!(params.batch, 3);
    }

    #[test]
    fn test_input_body() {
        let body = Batch::new(WebPageScanParams::new("https://example.com/").input());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"0": {"url": "https://example.com/", "rescan": false}})
        );
    }
}
