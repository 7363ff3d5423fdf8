//! API endpoint configuration.

use std::env;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "DAIRY_ERP_API_URL";

/// Where the ERP API lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. `"https://erp.example.com/api/v1"`.
    pub base_url: String,
}

impl ApiConfig {
    /// Create a config from a base URL. Trailing slashes are stripped so
    /// endpoint joining stays predictable.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from [`API_URL_ENV`], falling back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(value) if !value.is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Join the base URL with an endpoint path such as `"/orders"`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
