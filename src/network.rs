//! Network URL constants for the GradeJS SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.gradejs.com";
