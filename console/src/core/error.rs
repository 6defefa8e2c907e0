//! # Common Error Types
//!
//! Consolidated error handling for the console application.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the console.
//!
//! ## Error Categories
//!
//! - **RequestFailed**: The backend answered with a non-2xx status code
//! - **MalformedResponse**: A success response whose body is not the expected JSON
//! - **Network**: The request never produced a response (connection refused, DNS, TLS)
//! - **ValidationFailed**: Client-side form validation, raised before any network call
//! - **InvalidState**: An operation invoked from a state that does not allow it
//! - **Config**: Startup configuration problems
//!
//! ## Propagation
//!
//! Validation errors stay inside the form state machine. Everything else is
//! returned to the user action that started the request, which shows a blocking
//! acknowledgment and gives up. Nothing is retried automatically.
//!
//! `AppError` is `Clone` so results can travel through the event channel.

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use console::core::error::AppError;
///
/// let err = AppError::RequestFailed { status: 404 };
/// assert_eq!(err.to_string(), "HTTP error! status: 404");
///
/// let err = AppError::ValidationFailed {
///     field: "name".to_string(),
///     message: "El nombre es requerido".to_string(),
/// };
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Non-success HTTP status returned by the backend.
    #[error("HTTP error! status: {status}")]
    RequestFailed { status: u16 },

    /// Success status but the body could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Transport-level failure, no HTTP status available.
    #[error("Network error: {0}")]
    Network(String),

    /// Client-side validation failure for a single form field.
    #[error("{message}")]
    ValidationFailed { field: String, message: String },

    /// Operation not permitted in the current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration could not be resolved or applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for client-side validation errors
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValidationFailed { .. })
    }

    /// HTTP status for [`AppError::RequestFailed`]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}
