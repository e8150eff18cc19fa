//! Centralized constants for the render-status workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Base URL of the Render public REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.render.com/v1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Display Defaults
// =============================================================================

/// Seconds between refresh cycles in continuous mode.
pub const REFRESH_INTERVAL_SECS: u64 = 10;

/// Placeholder rendered for missing values.
pub const MISSING_VALUE: &str = "N/A";

// =============================================================================
// Environment Variables
// =============================================================================

/// API key used as the bearer token.
pub const ENV_API_KEY: &str = "RENDER_API_KEY";

/// Optional override of [`DEFAULT_BASE_URL`].
pub const ENV_BASE_URL: &str = "RENDER_BASE_URL";

/// Optional request timeout in seconds.
pub const ENV_TIMEOUT: &str = "RENDER_TIMEOUT";

/// When `1` or `true`, `.env` files are not loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
