/// Default API base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from `CATALOG_API_URL` (default: `http://localhost:3000`).
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}
