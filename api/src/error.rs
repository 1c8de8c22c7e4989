//! Error type shared by all API operations.

use thiserror::Error;

/// Failure of an [`crate::ApiClient`] operation.
///
/// Two worlds: the request never got an HTTP answer ([`ApiError::Network`]),
/// or the server answered with a non-success status ([`ApiError::Api`]).
/// The UI treats them differently: network errors get a generic retry
/// message, server rejections are shown verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, DNS, aborted fetch.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request with `status` and a message taken
    /// from the response body (or the status line when the body carried
    /// none).
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// True when the failure never reached the server.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// HTTP status of a server rejection, if this was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The API reports problems as `{"error": ...}` (business rules) or
/// `{"message": ...}` (framework-level errors). Anything else falls back
/// to the status line.
pub(crate) fn message_from_body(status: u16, reason: &str, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    if reason.is_empty() {
        format!("request failed with status {status}")
    } else {
        format!("{status} {reason}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_error_field() {
        let message = message_from_body(
            400,
            "Bad Request",
            r#"{"error": "You have already reviewed this place", "message": "other"}"#,
        );
        assert_eq!(message, "You have already reviewed this place");
    }

    #[test]
    fn test_falls_back_to_message_field() {
        let message = message_from_body(401, "Unauthorized", r#"{"message": "Missing token"}"#);
        assert_eq!(message, "Missing token");
    }

    #[test]
    fn test_falls_back_to_status_line() {
        assert_eq!(message_from_body(502, "Bad Gateway", "<html>"), "502 Bad Gateway");
        assert_eq!(message_from_body(502, "Bad Gateway", "{}"), "502 Bad Gateway");
    }

    #[test]
    fn test_unknown_status_without_reason() {
        assert_eq!(
            message_from_body(599, "", "not json"),
            "request failed with status 599"
        );
    }
}
