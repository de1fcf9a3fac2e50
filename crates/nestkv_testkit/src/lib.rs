//! # nestkv testkit
//!
//! Test utilities for nestkv.
//!
//! This crate provides:
//! - Database fixtures and helpers
//! - Property-based test generators using proptest
//! - A naive reference model for differential testing
//!
//! ## Usage
//!
//! ```
//! use nestkv_testkit::prelude::*;
//!
//! with_db(|db| {
//!     db.put("alpha", "1");
//!     assert!(db.is_duplicate_key("alpha"));
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
