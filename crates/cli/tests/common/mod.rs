//! Shared test utilities for render-status integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (API key, base URL).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `RENDER_API_KEY` is set to "rnd_test_key" unless overridden.

use assert_cmd::Command;

/// API key the hermetic command sends.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "rnd_test_key";

/// Returns a hermetic `render-status` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `RENDER_API_KEY` is set to a dummy value to satisfy config validation.
/// - Other variables that change behaviour are cleared.
pub fn render_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-status");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("RENDER_API_KEY", TEST_API_KEY);
    cmd.env("TZ", "UTC");

    cmd.env_remove("RENDER_BASE_URL")
        .env_remove("RENDER_TIMEOUT")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `render-status` command pointed at `base_url`.
#[allow(dead_code)]
pub fn render_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = render_cmd();
    cmd.env("RENDER_BASE_URL", base_url);
    cmd
}
