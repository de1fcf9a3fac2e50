//! # nestkv server
//!
//! Transport-agnostic request handling for the nestkv entries API.
//!
//! This crate provides:
//! - Typed request and response bodies for every endpoint
//! - Field validation for set-entry requests
//! - Handlers that serialize access to one shared [`nestkv_core::Database`]
//! - Status-code mapping for the engine's error taxonomy
//!
//! # Architecture
//!
//! The [`ApiServer`] facade accepts an [`ApiRequest`] and returns the
//! [`HttpReply`] a transport should send: a status code plus an
//! optional JSON body. A front end mounts these handlers on the
//! `/api/v1/database` routes; binding sockets and parsing HTTP is left
//! to the embedding application.
//!
//! All requests share one engine behind a single lock, so the
//! transaction stack is global to the server rather than scoped to a
//! connection.

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Handler code must not panic on bad input
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod protocol;
mod server;
mod validate;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use handler::{HandlerContext, RequestHandler, SetEntryOutcome};
pub use protocol::{
    status, ApiRequest, CounterBody, EntryBody, ErrorBody, HttpReply, SetEntryRequest,
};
pub use server::ApiServer;
