//! HTTP client for the send-message endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: a stub returning [`ApiError::Unavailable`] so the state
//! and wire layers stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`ApiError`]. The caller treats all of
//! them the same way (roll back the optimistic entry); the variants exist
//! for the diagnostic log line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SendMessageRequest, SendMessageResponse};

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Error returned by [`send_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, etc.).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-2xx status.
    #[error("network response was not ok: status {0}")]
    Status(u16),
    /// The body could not be decoded as [`SendMessageResponse`].
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No browser fetch is available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Post one user message and wait for the AI reply.
///
/// # Errors
///
/// Returns [`ApiError::Request`] on transport failure, [`ApiError::Status`]
/// for non-2xx responses, and [`ApiError::Decode`] when the body does not
/// match the expected schema.
pub async fn send_message(
    endpoint: &str,
    csrf_token: &str,
    payload: &SendMessageRequest,
) -> Result<SendMessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header(CSRF_HEADER, csrf_token)
            .json(payload)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !is_success_status(resp.status()) {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<SendMessageResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, csrf_token, payload);
        Err(ApiError::Unavailable)
    }
}
