//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - A missing API key is reported before any other validation.

use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_BASE_URL, ENV_DOTENV_DISABLED,
    MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from `.env` and environment variables.
pub struct ConfigLoader {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    /// Variables already present in the process environment win over `.env`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!(".env loading disabled");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `RENDER_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(super) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(super) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(super) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingEnvVar` when no API key was provided.
    /// - `ConfigError::InvalidValue` when the base URL is not an http(s) URL.
    /// - `ConfigError::InvalidTimeout` when the timeout is 0 or above the maximum.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self
            .api_key
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_KEY.to_string()))?;

        let base_url = validate_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self::validate_timeout(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { api_key },
        })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }
}

/// Validate that the base URL is an absolute http(s) URL with a host, and
/// strip any trailing slash.
///
/// Shared by the loader and the API client builder so both accept the same
/// URLs.
pub fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        var: ENV_BASE_URL.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. {DEFAULT_BASE_URL}): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: ENV_BASE_URL.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: ENV_BASE_URL.into(),
            message: format!("host is required (e.g. {DEFAULT_BASE_URL})"),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
