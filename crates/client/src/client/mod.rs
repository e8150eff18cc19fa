//! Main Render REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `services`: Service, deploy and job listing methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries: every call is attempted exactly once

pub mod builder;
mod services;

use secrecy::SecretString;

/// Render REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use render_client::RenderClient;
/// use secrecy::SecretString;
///
/// let client = RenderClient::builder()
///     .api_key(SecretString::new("rnd_xxx".into()))
///     .build()?;
/// let services = client.list_services().await?;
/// ```
#[derive(Debug)]
pub struct RenderClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
}

impl RenderClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RenderClientBuilder {
        builder::RenderClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
