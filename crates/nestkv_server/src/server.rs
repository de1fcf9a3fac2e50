//! The entries API server.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handler::{HandlerContext, RequestHandler};
use crate::protocol::{status, ApiRequest, ErrorBody, HttpReply};
use nestkv_core::Database;
use std::sync::Arc;
use tracing::debug;

/// The entries API server.
///
/// Owns the shared database and dispatches typed requests to the
/// matching handler, translating outcomes into status codes and JSON
/// bodies. A transport front end mounts these on the
/// `/api/v1/database` routes; binding sockets is left to the embedding
/// application.
///
/// # Example
///
/// ```
/// use nestkv_server::{ApiRequest, ApiServer, ServerConfig, SetEntryRequest};
///
/// let server = ApiServer::new(ServerConfig::default());
///
/// let reply = server.handle(ApiRequest::SetEntry(SetEntryRequest::new("alpha", "1")));
/// assert_eq!(reply.status, 201);
///
/// let reply = server.handle(ApiRequest::GetEntry { key: "alpha".into() });
/// assert_eq!(reply.status, 200);
/// ```
pub struct ApiServer {
    handler: RequestHandler,
    context: Arc<HandlerContext>,
}

impl ApiServer {
    /// Creates a server around an empty database.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_database(config, Database::new())
    }

    /// Creates a server around an existing database.
    pub fn with_database(config: ServerConfig, database: Database) -> Self {
        let context = Arc::new(HandlerContext::with_database(config, database));
        let handler = RequestHandler::new(Arc::clone(&context));

        Self { handler, context }
    }

    /// Handles a request and returns the reply a transport should send.
    pub fn handle(&self, request: ApiRequest) -> HttpReply {
        debug!("handling {}", request.endpoint());
        match request {
            ApiRequest::SetEntry(body) => match self.handler.handle_set_entry(body) {
                Ok(outcome) if outcome.created => HttpReply::empty(status::CREATED),
                Ok(_) => HttpReply::empty(status::OK),
                Err(err) => Self::error_reply(&err),
            },
            ApiRequest::GetEntry { key } => match self.handler.handle_get_entry(&key) {
                Ok(body) => HttpReply::json(status::OK, &body),
                Err(err) => Self::error_reply(&err),
            },
            ApiRequest::DeleteEntry { key } => match self.handler.handle_delete_entry(&key) {
                Ok(()) => HttpReply::empty(status::NO_CONTENT),
                Err(err) => Self::error_reply(&err),
            },
            ApiRequest::CountEntries { value } => {
                let body = self.handler.handle_count_entries(&value);
                HttpReply::json(status::OK, &body)
            }
            ApiRequest::BeginTransaction => match self.handler.handle_begin() {
                Ok(()) => HttpReply::empty(status::OK),
                Err(err) => Self::error_reply(&err),
            },
            ApiRequest::CommitTransactions => {
                self.handler.handle_commit();
                HttpReply::empty(status::OK)
            }
            ApiRequest::RollbackTransaction => match self.handler.handle_rollback() {
                Ok(()) => HttpReply::empty(status::OK),
                Err(err) => Self::error_reply(&err),
            },
            ApiRequest::ClearAll => {
                self.handler.handle_clear();
                HttpReply::empty(status::OK)
            }
        }
    }

    /// Returns the number of entries in the active view.
    pub fn entry_count(&self) -> usize {
        self.context.database().entry_count()
    }

    /// Returns the number of open transaction levels.
    pub fn open_transactions(&self) -> usize {
        self.context.database().open_transactions()
    }

    fn error_reply(err: &ApiError) -> HttpReply {
        HttpReply::json(err.status_code(), &ErrorBody::new(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{CounterBody, EntryBody, SetEntryRequest};

    fn server() -> ApiServer {
        ApiServer::new(ServerConfig::default())
    }

    fn set(server: &ApiServer, key: &str, value: &str) -> HttpReply {
        server.handle(ApiRequest::SetEntry(SetEntryRequest::new(key, value)))
    }

    #[test]
    fn set_entry_created_then_ok() {
        let server = server();
        assert_eq!(set(&server, "alpha", "1").status, 201);
        assert_eq!(set(&server, "alpha", "2").status, 200);
    }

    #[test]
    fn set_entry_rejects_invalid_fields() {
        let server = server();

        let reply = server.handle(ApiRequest::SetEntry(SetEntryRequest {
            key: Some("alpha".into()),
            value: None,
        }));
        assert_eq!(reply.status, 400);
        assert!(reply.body.unwrap().contains("value"));

        let reply = set(&server, "not ok", "1");
        assert_eq!(reply.status, 400);
        assert_eq!(server.entry_count(), 0);
    }

    #[test]
    fn get_entry_round_trip() {
        let server = server();
        set(&server, "alpha", "1");

        let reply = server.handle(ApiRequest::GetEntry {
            key: "alpha".into(),
        });
        assert_eq!(reply.status, 200);

        let body: EntryBody = serde_json::from_str(&reply.body.unwrap()).unwrap();
        assert_eq!(body.key, "alpha");
        assert_eq!(body.value, "1");
    }

    #[test]
    fn get_missing_entry_is_not_found() {
        let server = server();
        let reply = server.handle(ApiRequest::GetEntry {
            key: "missing".into(),
        });
        assert_eq!(reply.status, 404);
        assert!(reply.body.unwrap().contains("missing"));
    }

    #[test]
    fn delete_entry_statuses() {
        let server = server();
        set(&server, "alpha", "1");

        let reply = server.handle(ApiRequest::DeleteEntry {
            key: "alpha".into(),
        });
        assert_eq!(reply.status, 204);
        assert!(reply.body.is_none());

        let reply = server.handle(ApiRequest::DeleteEntry {
            key: "alpha".into(),
        });
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn counter_endpoint_never_fails() {
        let server = server();
        set(&server, "a", "red");
        set(&server, "b", "red");

        let reply = server.handle(ApiRequest::CountEntries {
            value: "red".into(),
        });
        assert_eq!(reply.status, 200);
        let body: CounterBody = serde_json::from_str(&reply.body.unwrap()).unwrap();
        assert_eq!(body.occurrences, 2);

        let reply = server.handle(ApiRequest::CountEntries {
            value: "blue".into(),
        });
        assert_eq!(reply.status, 200);
        let body: CounterBody = serde_json::from_str(&reply.body.unwrap()).unwrap();
        assert_eq!(body.occurrences, 0);
    }

    #[test]
    fn full_transaction_flow() {
        let server = server();

        // 1. Seed the committed state
        assert_eq!(set(&server, "alpha", "1").status, 201);

        // 2. Stage a change inside a transaction
        assert_eq!(server.handle(ApiRequest::BeginTransaction).status, 200);
        set(&server, "alpha", "2");
        assert_eq!(server.open_transactions(), 2);

        // 3. Roll the change back
        assert_eq!(server.handle(ApiRequest::RollbackTransaction).status, 200);
        let reply = server.handle(ApiRequest::GetEntry {
            key: "alpha".into(),
        });
        let body: EntryBody = serde_json::from_str(&reply.body.unwrap()).unwrap();
        assert_eq!(body.value, "1");

        // 4. Commit closes the remaining level
        assert_eq!(server.handle(ApiRequest::CommitTransactions).status, 200);
        assert_eq!(server.open_transactions(), 0);
    }

    #[test]
    fn rollback_without_transaction_is_bad_request() {
        let server = server();
        let reply = server.handle(ApiRequest::RollbackTransaction);
        assert_eq!(reply.status, 400);
        assert!(reply.body.unwrap().contains("no open transaction"));
    }

    #[test]
    fn commit_without_transaction_is_ok() {
        let server = server();
        assert_eq!(server.handle(ApiRequest::CommitTransactions).status, 200);
    }

    #[test]
    fn begin_reports_bad_request_at_the_limit() {
        let server = server();
        for _ in 0..19 {
            assert_eq!(server.handle(ApiRequest::BeginTransaction).status, 200);
        }
        let reply = server.handle(ApiRequest::BeginTransaction);
        assert_eq!(reply.status, 400);
        assert!(reply.body.unwrap().contains("too many open transactions"));
    }

    #[test]
    fn clear_resets_the_store() {
        let server = server();
        set(&server, "alpha", "1");
        server.handle(ApiRequest::BeginTransaction);
        set(&server, "beta", "2");

        let reply = server.handle(ApiRequest::ClearAll);
        assert_eq!(reply.status, 200);
        assert_eq!(server.entry_count(), 0);
        assert_eq!(server.open_transactions(), 0);
    }

    #[test]
    fn server_accepts_a_prepared_database() {
        let mut db = Database::new();
        db.put("alpha", "1");

        let server = ApiServer::with_database(ServerConfig::default(), db);
        assert_eq!(server.entry_count(), 1);
        assert_eq!(set(&server, "alpha", "2").status, 200);
    }
}
