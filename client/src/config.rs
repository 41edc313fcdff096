//! # Client Configuration
//!
//! API endpoint configuration from environment variables, with defaults that
//! match the production backend.

use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://api.safeplace.id/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// API gateway configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL every request path is resolved against.
    pub base_url: String,
    /// Request timeout; a timed-out request surfaces as a connectivity failure.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("ORDERING_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = env::var("ORDERING_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| "ORDERING_API_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
