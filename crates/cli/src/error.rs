//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `ClientError` to the matching exit code.
//! - Map the refresh loop's outcome to the process exit code.
//! - Suggest a fix for rejected API keys.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Interrupting continuous mode is a normal termination and exits with 0.
//! - Exit code 130 is reserved for interrupting a single run (128 + SIGINT).

use render_client::ClientError;
use render_config::ConfigError;

use crate::watch::{Mode, Outcome};

/// Printed after the error when the API rejected the key.
pub const AUTH_HINT: &str =
    "Hint: check that RENDER_API_KEY holds a valid Render API key with access to these services";

/// Structured exit codes for render-status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success, including Ctrl+C in continuous mode.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing API key, invalid value, unreadable `.env`.
    ///
    /// Always reported before any network call is made.
    ConfigError = 2,

    /// Request error - network failure or non-success HTTP status.
    RequestError = 3,

    /// Parse error - the API answered with an unexpected payload shape.
    ParseError = 4,

    /// Interrupted - Ctrl+C during a `--once` run (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::HttpError(_) | ClientError::ApiError { .. } => ExitCode::RequestError,
            ClientError::InvalidResponse(_) => ExitCode::ParseError,
            ClientError::InvalidUrl(_) | ClientError::MissingApiKey => ExitCode::ConfigError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigError
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }
        ExitCode::GeneralError
    }
}

/// Exit code for a finished refresh loop.
///
/// Ctrl+C ends continuous mode normally; during a single run it is an
/// interruption.
pub fn exit_code_for(mode: Mode, result: &anyhow::Result<Outcome>) -> ExitCode {
    match result {
        Ok(Outcome::Completed) => ExitCode::Success,
        Ok(Outcome::Interrupted) => match mode {
            Mode::Once => ExitCode::Interrupted,
            Mode::Watch { .. } => ExitCode::Success,
        },
        Err(e) => e.exit_code(),
    }
}

/// Extra guidance for errors the user can fix, if any.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<ClientError>())
        .any(ClientError::is_auth_error)
        .then_some(AUTH_HINT)
}
