//! Core engine for nestkv, an in-memory key/value store with nested
//! snapshot transactions.
//!
//! The store maps string keys to string values and keeps a per-value
//! occurrence count alongside the entries, so asking how many keys
//! hold a given value is a constant-time lookup. Transactions nest by
//! stacking full copies of the store: `begin` copies the current
//! state, `rollback` discards the innermost copy, and `commit`
//! installs the innermost copy as the new base while closing every
//! open level.
//!
//! # Example
//!
//! ```
//! use nestkv_core::Database;
//!
//! let mut db = Database::new();
//! db.put("alpha", "1");
//!
//! db.begin()?;
//! db.put("alpha", "2");
//! db.rollback()?;
//!
//! assert_eq!(db.retrieve("alpha")?.value, "1");
//! # Ok::<(), nestkv_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Version of the core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod database;
pub mod error;
pub mod snapshot;
pub mod transaction;
pub mod types;

pub use config::{Config, DEFAULT_MAX_OPEN_TRANSACTIONS};
pub use database::Database;
pub use error::{CoreError, CoreResult};
pub use snapshot::Snapshot;
pub use transaction::TransactionStack;
pub use types::{Counter, Entry};
