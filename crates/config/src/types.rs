//! Configuration types for render-status.
//!
//! Responsibilities:
//! - Define connection settings (base URL, timeout).
//! - Define authentication settings (API key).
//! - Define the main `Config` structure combining both.
//!
//! Does NOT handle:
//! - Configuration loading from `.env`/environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - A `Config` is only produced by `ConfigLoader::build()`, so the base URL is
//!   always validated and has no trailing slash.
//! - The API key is never printed by `Debug`.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Connection configuration for the Render API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://api.render.com/v1)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer token sent with every request.
    pub api_key: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the default API endpoint with the given key.
    pub fn with_api_key(api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig { api_key },
        }
    }
}
