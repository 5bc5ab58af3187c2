//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! [`ApiError`] is what every service wrapper returns: the backend's message
//! plus the HTTP status when there was one, so policy decisions (401 forces
//! a logout, 5xx gets a generic message) can be made where the error is
//! applied to state rather than where it happened. [`AppError`] is the
//! application-wide umbrella covering storage and validation failures as
//! well.

use thiserror::Error;

/// An HTTP service wrapper failure.
///
/// `status` is `None` for transport-level failures (connection refused,
/// timeout, DNS) and `Some` for non-2xx responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// Transport failure, no HTTP status available.
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError {
            status: None,
            message: format!("Network error: {}", err),
        }
    }

    /// A 2xx response whose body did not parse.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError {
            status: None,
            message: format!("Failed to parse response: {}", err),
        }
    }

    /// A non-2xx response with the best message we could extract.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Whether this failure must force a logout.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status, Some(code) if code >= 500)
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error (network, HTTP status, parse).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local persistence error (session/preferences file store).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation error, caught before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),
}

/// Convenience alias used throughout the client crate.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::status(401, "expired").is_unauthorized());
        assert!(!ApiError::status(404, "missing").is_unauthorized());
        assert!(!ApiError::network("refused").is_unauthorized());
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ApiError::status(409, "Saldo insuficiente");
        assert_eq!(err.to_string(), "Saldo insuficiente");
        let err = AppError::Validation("Monto inválido".to_string());
        assert_eq!(err.to_string(), "Validation error: Monto inválido");
    }
}
