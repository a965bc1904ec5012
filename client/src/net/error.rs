//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, auth rejections and missing resources are kept
//! distinct so pages can pick the right branch: login forms show the server's
//! message, the session bootstrap downgrades to anonymous, and the detail
//! page renders "not found" instead of a generic failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The API rejected the credentials or the bearer token (401/403).
    #[error("{message}")]
    Unauthorized { status: u16, message: String },

    /// The requested resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// An auth response succeeded but carried no credential token.
    #[error("auth response did not include a token")]
    MissingToken,

    /// The request was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| format!("request failed: {status}"));
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound { message },
            _ => Self::Status { status, message },
        }
    }

    /// Text suitable for showing to the user, preferring what the server said.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { message, .. } | Self::NotFound { message } | Self::Status { message, .. }
                if !message.starts_with("request failed:") =>
            {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Extract a human-readable message from an error body.
///
/// Accepts `{"detail": "..."}`, `{"detail": [{"msg": "..."}, ...]}` and
/// `{"message": "..."}`.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => return Some(detail.trim().to_owned()),
        Some(Value::Array(entries)) => {
            let joined = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        _ => {}
    }
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
