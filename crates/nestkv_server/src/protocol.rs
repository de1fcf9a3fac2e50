//! Wire types for the entries API.

use nestkv_core::{Counter, Entry};
use serde::{Deserialize, Serialize};

/// HTTP status codes used by the entries API.
pub mod status {
    /// 200 OK.
    pub const OK: u16 = 200;
    /// 201 Created.
    pub const CREATED: u16 = 201;
    /// 204 No Content.
    pub const NO_CONTENT: u16 = 204;
    /// 400 Bad Request.
    pub const BAD_REQUEST: u16 = 400;
    /// 404 Not Found.
    pub const NOT_FOUND: u16 = 404;
}

/// Body of a set-entry request.
///
/// Both fields are optional at the wire level so that a request with a
/// missing field still deserializes and can be rejected with a
/// field-level validation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntryRequest {
    /// Key to store under.
    pub key: Option<String>,
    /// Value to store.
    pub value: Option<String>,
}

impl SetEntryRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Body returned for a successful entry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryBody {
    /// The entry key.
    pub key: String,
    /// The stored value.
    pub value: String,
}

impl From<Entry> for EntryBody {
    fn from(entry: Entry) -> Self {
        Self {
            key: entry.key,
            value: entry.value,
        }
    }
}

/// Body returned for a value count lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterBody {
    /// Number of keys currently holding the value.
    pub occurrences: u64,
}

impl From<Counter> for CounterBody {
    fn from(counter: Counter) -> Self {
        Self {
            occurrences: counter.as_u64(),
        }
    }
}

/// Body returned for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}

impl ErrorBody {
    /// Creates an error body with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A request to the entries API, one variant per endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// `PUT /api/v1/database/entries`
    SetEntry(SetEntryRequest),
    /// `GET /api/v1/database/entries/{key}`
    GetEntry {
        /// Key to look up.
        key: String,
    },
    /// `DELETE /api/v1/database/entries/{key}`
    DeleteEntry {
        /// Key to delete.
        key: String,
    },
    /// `GET /api/v1/database/entries/counters/{value}`
    CountEntries {
        /// Value to count.
        value: String,
    },
    /// `POST /api/v1/database/transactions/begin`
    BeginTransaction,
    /// `POST /api/v1/database/transactions/commit`
    CommitTransactions,
    /// `POST /api/v1/database/transactions/rollback`
    RollbackTransaction,
    /// `POST /api/v1/database/clear`
    ClearAll,
}

impl ApiRequest {
    /// Returns a short name for the endpoint, for logging.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::SetEntry(_) => "set-entry",
            Self::GetEntry { .. } => "get-entry",
            Self::DeleteEntry { .. } => "delete-entry",
            Self::CountEntries { .. } => "count-entries",
            Self::BeginTransaction => "begin-transaction",
            Self::CommitTransactions => "commit-transactions",
            Self::RollbackTransaction => "rollback-transaction",
            Self::ClearAll => "clear-all",
        }
    }
}

/// Status line and serialized body a transport should send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// JSON body, absent for empty responses.
    pub body: Option<String>,
}

impl HttpReply {
    /// Creates a reply with no body.
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Creates a reply with a JSON body.
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        Self {
            status,
            body: serde_json::to_string(body).ok(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
