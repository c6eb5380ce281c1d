//! API base-URL configuration.

/// Environment variable selecting the API base URL.
pub const API_URL_ENV: &str = "STOCKDECK_API_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Connection settings for the remote API.
///
/// The base URL is the only environment-derived behavior the client has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL (trailing slash trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from `STOCKDECK_API_URL`, falling back to
    /// `http://localhost:8000`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
