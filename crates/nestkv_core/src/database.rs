//! The database engine facade.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::snapshot::Snapshot;
use crate::transaction::TransactionStack;
use crate::types::{Counter, Entry};

/// In-memory key/value store with nested snapshot transactions.
///
/// All operations target the active view: the innermost open
/// transaction level when one exists, the committed base state
/// otherwise. [`commit`](Self::commit) installs the innermost level as
/// the new base and closes every open level at once, while
/// [`rollback`](Self::rollback) discards only the innermost level.
#[derive(Debug)]
pub struct Database {
    config: Config,
    base: Snapshot,
    transactions: TransactionStack,
}

impl Database {
    /// Creates an empty database with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty database with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let transactions = TransactionStack::new(config.max_open_transactions);
        Self {
            config,
            base: Snapshot::new(),
            transactions,
        }
    }

    /// Stores `value` under `key` in the active view.
    ///
    /// Replaces any previous value for the key and keeps the occurrence
    /// counts in step.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        debug!("put key {:?} (depth {})", key, self.transactions.depth());
        self.active_mut().insert(key, value);
    }

    /// Returns the entry for `key` from the active view.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the key has no entry.
    pub fn retrieve(&self, key: &str) -> CoreResult<Entry> {
        match self.active().get(key) {
            Some(value) => Ok(Entry::new(key, value)),
            None => Err(CoreError::not_found(key)),
        }
    }

    /// Removes the entry for `key` from the active view.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the key has no entry.
    pub fn remove(&mut self, key: &str) -> CoreResult<()> {
        let depth = self.transactions.depth();
        match self.active_mut().remove(key) {
            Some(_) => {
                debug!("removed key {:?} (depth {})", key, depth);
                Ok(())
            }
            None => Err(CoreError::not_found(key)),
        }
    }

    /// Returns how many keys currently hold `value` in the active view.
    ///
    /// This is a constant-time map lookup, not a scan. Unknown values
    /// count as zero.
    #[must_use]
    pub fn count_entries(&self, value: &str) -> Counter {
        Counter::new(self.active().occurrences_of(value))
    }

    /// Returns `true` if `key` already exists in the committed base
    /// state.
    ///
    /// Entries staged inside open transaction levels do not count as
    /// duplicates until committed.
    #[must_use]
    pub fn is_duplicate_key(&self, key: &str) -> bool {
        self.base.contains_key(key)
    }

    /// Drops every entry, every occurrence count, and every open
    /// transaction level.
    pub fn clear_all(&mut self) {
        self.base.clear();
        self.transactions.clear();
        info!("cleared all entries and open transactions");
    }

    /// Opens a new transaction level.
    ///
    /// The first begin from the idle state occupies two levels: the
    /// restore point and the working copy. Nested begins add one level
    /// each.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TooManyTransactionsOpen`] when the
    /// configured level limit would be exceeded.
    pub fn begin(&mut self) -> CoreResult<()> {
        match self.transactions.begin(&self.base) {
            Ok(()) => {
                debug!("opened transaction (depth {})", self.transactions.depth());
                Ok(())
            }
            Err(err) => {
                warn!("begin rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Commits every open transaction level at once.
    ///
    /// The innermost level becomes the new base state. Calling commit
    /// with no open transaction is a no-op.
    pub fn commit(&mut self) {
        let depth = self.transactions.depth();
        match self.transactions.commit() {
            Some(snapshot) => {
                self.base = snapshot;
                info!("committed {} transaction level(s)", depth);
            }
            None => debug!("commit ignored: no open transaction"),
        }
    }

    /// Discards the innermost transaction level.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TransactionNotFound`] if no transaction is
    /// open.
    pub fn rollback(&mut self) -> CoreResult<()> {
        self.transactions.rollback()?;
        debug!("rolled back transaction (depth {})", self.transactions.depth());
        Ok(())
    }

    /// Returns the number of open transaction levels.
    #[must_use]
    pub fn open_transactions(&self) -> usize {
        self.transactions.depth()
    }

    /// Returns `true` if any transaction level is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.transactions.is_open()
    }

    /// Returns the number of entries in the active view.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.active().len()
    }

    /// Returns `true` if the active view holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// Returns the configuration the database was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn active(&self) -> &Snapshot {
        match self.transactions.active() {
            Some(level) => level,
            None => &self.base,
        }
    }

    fn active_mut(&mut self) -> &mut Snapshot {
        match self.transactions.active_mut() {
            Some(level) => level,
            None => &mut self.base,
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
