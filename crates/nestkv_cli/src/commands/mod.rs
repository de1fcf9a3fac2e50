//! CLI command implementations.

pub mod exec;
pub mod language;
pub mod shell;
