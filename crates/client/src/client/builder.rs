//! Client builder for constructing [`RenderClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (api_key) and the base URL
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, default headers)
//!
//! # Invariants
//! - `api_key` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::SecretString;
use std::time::Duration;

use crate::client::RenderClient;
use crate::error::{ClientError, Result};
use render_config::{
    Config,
    validate_base_url,
    constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`RenderClient`].
pub struct RenderClientBuilder {
    base_url: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl Default for RenderClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RenderClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the API, e.g. `https://api.render.com/v1`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the API key sent as a bearer token.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(self, config: &Config) -> Self {
        self.base_url(config.connection.base_url.clone())
            .api_key(config.auth.api_key.clone())
            .timeout(config.connection.timeout)
    }

    /// Build the client.
    pub fn build(self) -> Result<RenderClient> {
        let api_key = self.api_key.ok_or(ClientError::MissingApiKey)?;
        let base_url = validate_base_url(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(RenderClient {
            http,
            base_url,
            api_key,
        })
    }
}
