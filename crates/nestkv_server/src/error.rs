//! Error types for the entries API.

use crate::protocol::status;
use nestkv_core::CoreError;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while serving the entries API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request failed field validation before reaching the engine.
    #[error("{message}")]
    Validation {
        /// Description of the violated rule.
        message: String,
    },

    /// The engine rejected the operation.
    #[error(transparent)]
    Engine(#[from] CoreError),
}

impl ApiError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code this error maps to.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => status::BAD_REQUEST,
            Self::Engine(CoreError::NotFound { .. }) => status::NOT_FOUND,
            Self::Engine(CoreError::TransactionNotFound)
            | Self::Engine(CoreError::TooManyTransactionsOpen { .. }) => status::BAD_REQUEST,
        }
    }

    /// Returns true if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
