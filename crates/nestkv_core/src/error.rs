//! Error types for the nestkv core engine.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core database operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No entry exists for the requested key in the active view.
    #[error("no entry found for key: {key}")]
    NotFound {
        /// The key that was looked up.
        key: String,
    },

    /// A rollback was requested while no transaction was open.
    #[error("no open transaction to roll back")]
    TransactionNotFound,

    /// Opening another transaction would exceed the configured limit.
    #[error("too many open transactions: the limit is {limit}")]
    TooManyTransactionsOpen {
        /// Maximum number of transaction levels that may be open at once.
        limit: usize,
    },
}

impl CoreError {
    /// Creates a not-found error for the given key.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Creates a transaction limit error.
    pub fn too_many_transactions(limit: usize) -> Self {
        Self::TooManyTransactionsOpen { limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_key() {
        let err = CoreError::not_found("alpha");
        assert_eq!(err.to_string(), "no entry found for key: alpha");
    }

    #[test]
    fn limit_error_names_the_limit() {
        let err = CoreError::too_many_transactions(20);
        assert_eq!(err.to_string(), "too many open transactions: the limit is 20");
    }
}
