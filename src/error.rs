//! Error types for the Triage client
//!
//! Every public API returns `Result<T, Error>`. Transport failures and
//! non-2xx responses are kept apart so callers can decide what to retry;
//! the client itself never retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error payload returned by the Triage API
///
/// The service answers failed requests with `{"error": "<kind>", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine readable error kind (e.g. `NOT_FOUND`)
    pub error: String,
    /// Human readable cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The main error type for the Triage client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Server error (HTTP {status}): {body}")]
    Server {
        status: u16,
        body: String,
        api: Option<ApiError>,
    },

    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a server error from a status code and raw response body
    ///
    /// The body is parsed as an [`ApiError`] when possible.
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let api = serde_json::from_str::<ApiError>(&body).ok();
        Self::Server { status, body, api }
    }

    /// True for transport-level failures (DNS, TCP, TLS, body read)
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// True for non-2xx responses
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error kind reported by the service, if any
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Server { api: Some(api), .. } => Some(api.error.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for the Triage client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("token");
        assert_eq!(err.to_string(), "Missing required config field: token");

        let err = Error::server(404, "Not found");
        assert_eq!(err.to_string(), "Server error (HTTP 404): Not found");
    }

    #[test]
    fn test_server_error_parses_api_payload() {
        let err = Error::server(
            404,
            r#"{"error":"NOT_FOUND","message":"sample does not exist"}"#,
        );
        assert!(err.is_server());
        assert!(!err.is_connection());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), Some("NOT_FOUND"));

        if let Error::Server { api: Some(api), .. } = err {
            assert_eq!(api.message.as_deref(), Some("sample does not exist"));
        } else {
            panic!("Expected structured server error");
        }
    }

    #[test]
    fn test_server_error_with_plain_body() {
        let err = Error::server(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert!(err.kind().is_none());
    }

    #[test]
    fn test_non_server_errors_have_no_status() {
        assert!(Error::decode("bad line").status().is_none());
        assert!(Error::config("x").kind().is_none());
    }
}
