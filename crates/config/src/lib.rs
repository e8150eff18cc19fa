//! Configuration management for render-status.
//!
//! This crate provides types and loaders for the Render API connection
//! settings, read from `.env` files and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, validate_base_url};
pub use types::{AuthConfig, Config, ConnectionConfig};
