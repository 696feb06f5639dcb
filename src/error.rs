//! Error types for the ARP cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == ARP Cache Error Enum ==
/// Unified error type for the ARP cache and its control API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArpCacheError {
    /// Timeout or clock period was zero or negative
    #[error("Invalid timeout: {0} (must be a positive number of seconds)")]
    InvalidTimeout(i64),

    /// The epoch clock needs a tokio runtime to spawn its ticker
    #[error("No tokio runtime available to drive the epoch clock")]
    NoRuntime,

    /// IPv4 or MAC address failed to parse
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Slot is empty or its entry has expired
    #[error("No resolved entry for {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ArpCacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            ArpCacheError::InvalidTimeout(_)
            | ArpCacheError::InvalidAddress(_)
            | ArpCacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ArpCacheError::NotFound(_) => StatusCode::NOT_FOUND,
            ArpCacheError::NoRuntime => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the ARP cache.
pub type Result<T> = std::result::Result<T, ArpCacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ArpCacheError::NotFound("10.0.0.1".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ArpCacheError::InvalidAddress("zz".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ArpCacheError::InvalidTimeout(0).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ArpCacheError::NoRuntime.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_includes_value() {
        let err = ArpCacheError::InvalidTimeout(-5);
        assert!(err.to_string().contains("-5"));
    }
}
