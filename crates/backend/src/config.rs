//! Backend endpoint configuration.

/// Fallback base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the content backend lives.
///
/// The base URL is the only shared network configuration: every endpoint
/// path is resolved against it and no caller constructs its own host
/// string.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base HTTP URL of the content backend, without a trailing slash.
    pub base_url: String,
}

impl BackendConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                 |
    /// |-------------------|-------------------------|
    /// | `CONTENT_API_URL` | `http://localhost:8000` |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CONTENT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    /// Build a config from an explicit base URL.
    ///
    /// Trailing slashes are trimmed so endpoint paths can be appended
    /// directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}
