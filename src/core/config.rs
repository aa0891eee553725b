//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default upstream timeout in seconds
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend that serves `/api/*`
    /// Example: http://localhost:8080
    pub backend_url: Option<String>,

    /// Upstream request timeout in seconds
    pub backend_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("BACKEND_TIMEOUT_SECS").ok(),
        )
    }

    /// Build from raw values; blank URLs count as unset and bad timeouts fall back
    pub fn from_values(backend_url: Option<String>, timeout: Option<String>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let backend_timeout_secs = timeout
            .and_then(|t| t.trim().parse().ok())
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS);

        Self {
            backend_url,
            backend_timeout_secs,
        }
    }

    /// Check if an upstream backend is configured
    pub fn has_backend(&self) -> bool {
        self.backend_url.is_some()
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
