//! Client for the portfolio REST API.
//!
//! One submodule per resource. Every call returns an [`ApiError`] instead of
//! panicking; protected calls fail fast with [`ApiError::MissingToken`] when
//! no session is stored, before anything is sent.

pub mod categories;
pub mod users;
pub mod works;

use gloo_console::error;
use gloo_net::http::Response;
use serde::Deserialize;
use thiserror::Error;

use crate::session::credentials;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no authentication token stored, cannot {0}")]
    MissingToken(&'static str),
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    #[error("could not build the request payload: {0}")]
    Payload(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Logs a failed call with its HTTP status when the server answered.
pub fn log_failure(action: &str, err: &ApiError) {
    match err.status() {
        Some(status) => error!(format!("{} failed with status {}: {}", action, status, err)),
        None => error!(format!("{} failed: {}", action, err)),
    }
}

/// `Authorization` header value for the stored session.
fn bearer(action: &'static str) -> Result<String, ApiError> {
    credentials()
        .token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::MissingToken(action))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turns a non-2xx response into an error, preferring the `message` the API
/// may put in the body over `fallback`. Bodies that are not JSON (proxy error
/// pages, empty 500s) fall back silently.
async fn status_error(response: &Response, fallback: &str) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());
    ApiError::Status {
        status: response.status(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_known_only_when_the_server_answered() {
        let rejected = ApiError::Status {
            status: 413,
            message: "image too large".into(),
        };

        assert_eq!(rejected.status(), Some(413));
        assert_eq!(rejected.to_string(), "image too large (status 413)");
        assert_eq!(ApiError::MissingToken("delete a project").status(), None);
        assert_eq!(ApiError::Payload("no FormData".into()).status(), None);
    }
}
