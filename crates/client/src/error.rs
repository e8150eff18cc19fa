//! Error types for the Render client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Render client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body did not have the expected envelope shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without an API key.
    #[error("API key is required")]
    MissingApiKey,
}

impl ClientError {
    /// True for network failures and non-success HTTP statuses.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::ApiError { .. })
    }

    /// True when the API answered but the payload could not be understood.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://api.render.com/v1/services".to_string(),
            message: "nope".to_string(),
        }
    }

    #[test]
    fn test_api_error_is_request_error() {
        let err = api_error(500);
        assert!(err.is_request_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_invalid_response_is_parse_error() {
        let err = ClientError::InvalidResponse("missing `service`".to_string());
        assert!(err.is_parse_error());
        assert!(!err.is_request_error());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(api_error(401).is_auth_error());
        assert!(api_error(403).is_auth_error());
        assert!(!api_error(404).is_auth_error());
        assert!(!ClientError::MissingApiKey.is_auth_error());
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            api_error(503).to_string(),
            "API error (503) at https://api.render.com/v1/services: nope"
        );
    }
}
