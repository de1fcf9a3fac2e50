//! Database configuration.

/// Default maximum number of transaction levels open at once.
pub const DEFAULT_MAX_OPEN_TRANSACTIONS: usize = 20;

/// Configuration for a [`Database`](crate::Database).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of transaction levels that may be open at once.
    ///
    /// A begin from the idle state occupies two levels, so the smallest
    /// usable limit is 2.
    pub max_open_transactions: usize,
}

impl Config {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_open_transactions: DEFAULT_MAX_OPEN_TRANSACTIONS,
        }
    }

    /// Sets the maximum number of open transaction levels.
    #[must_use]
    pub const fn with_max_open_transactions(mut self, limit: usize) -> Self {
        self.max_open_transactions = limit;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
