//! Request handlers for the entries API.

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::protocol::{CounterBody, EntryBody, SetEntryRequest};
use crate::validate;
use nestkv_core::Database;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Context shared by all request handlers.
///
/// The engine sits behind a single mutex. Every request takes the lock
/// for the duration of one engine call, which serializes all API
/// traffic against the one shared store and its transaction stack.
pub struct HandlerContext {
    /// Server configuration.
    pub config: ServerConfig,
    database: Mutex<Database>,
}

impl HandlerContext {
    /// Creates a context with an empty database.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_database(config, Database::new())
    }

    /// Creates a context around an existing database.
    pub fn with_database(config: ServerConfig, database: Database) -> Self {
        Self {
            config,
            database: Mutex::new(database),
        }
    }

    /// Locks and returns the shared database.
    pub fn database(&self) -> MutexGuard<'_, Database> {
        self.database.lock()
    }
}

/// Outcome of a set-entry request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetEntryOutcome {
    /// `true` when the key was not yet present in the committed state.
    pub created: bool,
}

/// Handler for entries API requests.
pub struct RequestHandler {
    context: Arc<HandlerContext>,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(context: Arc<HandlerContext>) -> Self {
        Self { context }
    }

    /// Handles a set-entry request.
    ///
    /// Whether the outcome counts as a creation follows the committed
    /// base state, so a key staged inside an open transaction still
    /// reports `created` until the transaction commits.
    pub fn handle_set_entry(&self, request: SetEntryRequest) -> ApiResult<SetEntryOutcome> {
        let config = &self.context.config;
        let key = validate::required_field("key", request.key.as_deref(), config)?;
        let value = validate::required_field("value", request.value.as_deref(), config)?;

        let mut db = self.context.database();
        let created = !db.is_duplicate_key(key);
        db.put(key, value);
        Ok(SetEntryOutcome { created })
    }

    /// Handles an entry lookup.
    pub fn handle_get_entry(&self, key: &str) -> ApiResult<EntryBody> {
        let entry = self.context.database().retrieve(key)?;
        Ok(EntryBody::from(entry))
    }

    /// Handles an entry deletion.
    pub fn handle_delete_entry(&self, key: &str) -> ApiResult<()> {
        self.context.database().remove(key)?;
        Ok(())
    }

    /// Handles a value count lookup. Never fails; unknown values count
    /// as zero.
    pub fn handle_count_entries(&self, value: &str) -> CounterBody {
        CounterBody::from(self.context.database().count_entries(value))
    }

    /// Handles a begin request.
    pub fn handle_begin(&self) -> ApiResult<()> {
        self.context.database().begin()?;
        Ok(())
    }

    /// Handles a commit request. Never fails; committing with no open
    /// transaction is a no-op.
    pub fn handle_commit(&self) {
        self.context.database().commit();
    }

    /// Handles a rollback request.
    pub fn handle_rollback(&self) -> ApiResult<()> {
        self.context.database().rollback()?;
        Ok(())
    }

    /// Handles a clear request. Never fails.
    pub fn handle_clear(&self) {
        self.context.database().clear_all();
    }
}
