//! Request helper shared by all endpoints.
//!
//! Sends a request once, turns non-success statuses into
//! [`ClientError::ApiError`] and decodes the body as JSON. Body decoding
//! failures are reported as [`ClientError::InvalidResponse`] so callers can
//! tell a broken payload apart from a broken connection.

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Send a request and fail on any non-success status.
///
/// The error message prefers the API's JSON `message` field and falls back
/// to the raw body.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or(body);

    debug!(status, %url, "Request failed");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Send a request and decode the successful body as JSON.
pub async fn fetch_json(builder: RequestBuilder, endpoint: &str) -> Result<Value> {
    let response = send_request(builder).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("{endpoint}: body is not valid JSON: {e}"))
    })
}
