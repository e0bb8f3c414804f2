//! Client error types

use super::response::ResponseBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Api {
        status: u16,
        status_text: String,
        message: String,
        body: ResponseBody,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store could not be updated
    #[error("Session error: {0}")]
    Session(#[from] oceanview_core::CoreError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Build the error for a non-2xx response
    ///
    /// The message is the body's `error` field, then its `message` field, then
    /// the raw body, then `HTTP <status>: <reason>`.
    pub fn from_response(status: StatusCode, body: ResponseBody) -> Self {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let message = body
            .error_message()
            .unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), status_text));

        Self::Api {
            status: status.as_u16(),
            status_text,
            message,
            body,
        }
    }

    /// HTTP status of a failed response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parsed body of a failed response
    pub fn body(&self) -> Option<&ResponseBody> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the server rejected the stored token
    pub fn is_auth_expired(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_field_wins() {
        let body = ResponseBody::Json(json!({"error": "X", "message": "Y"}));
        let err = ClientError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "X");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_message_field_used_without_error() {
        let body = ResponseBody::Json(json!({"message": "Y", "timestamp": 1}));
        let err = ClientError::from_response(StatusCode::NOT_FOUND, body);
        assert_eq!(err.to_string(), "Y");
    }

    #[test]
    fn test_raw_text_body() {
        let body = ResponseBody::Text("boom".into());
        let err = ClientError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_fallback_uses_status_line() {
        let body = ResponseBody::Json(json!({"timestamp": 1}));
        let err = ClientError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");

        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, ResponseBody::Text(String::new()));
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(err.body(), Some(&ResponseBody::Text(String::new())));
    }

    #[test]
    fn test_auth_expired() {
        let err = ClientError::from_response(StatusCode::UNAUTHORIZED, ResponseBody::Text(String::new()));
        assert!(err.is_auth_expired());

        let err = ClientError::Configuration("origin is required".into());
        assert!(!err.is_auth_expired());
        assert_eq!(err.status(), None);
    }
}
