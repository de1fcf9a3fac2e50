//! A naive reference model of the engine for differential testing.

use nestkv_core::{CoreError, Database, DEFAULT_MAX_OPEN_TRANSACTIONS};
use std::collections::HashMap;

/// One operation against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Store a value under a key.
    Put {
        /// Key to store under.
        key: String,
        /// Value to store.
        value: String,
    },
    /// Remove a key.
    Remove {
        /// Key to remove.
        key: String,
    },
    /// Look up a key.
    Retrieve {
        /// Key to look up.
        key: String,
    },
    /// Count keys holding a value.
    Count {
        /// Value to count.
        value: String,
    },
    /// Open a transaction level.
    Begin,
    /// Commit every open level.
    Commit,
    /// Discard the innermost level.
    Rollback,
}

/// Reference model of the engine: plain maps, counts recomputed by
/// scanning.
///
/// The model mirrors the engine's contract one step at a time and
/// makes no attempt to be fast. [`check_op`] applies an operation to
/// both the model and a real database and asserts that every
/// observable outcome matches.
#[derive(Debug)]
pub struct ModelDb {
    base: HashMap<String, String>,
    levels: Vec<HashMap<String, String>>,
    max_open: usize,
}

impl ModelDb {
    /// Creates an empty model with the default transaction limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: HashMap::new(),
            levels: Vec::new(),
            max_open: DEFAULT_MAX_OPEN_TRANSACTIONS,
        }
    }

    /// Stores a value in the active map.
    pub fn put(&mut self, key: &str, value: &str) {
        self.active_mut().insert(key.to_owned(), value.to_owned());
    }

    /// Removes a key, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.active_mut().remove(key).is_some()
    }

    /// Looks up a key in the active map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.active().get(key).map(String::as_str)
    }

    /// Counts keys holding `value` by scanning the active map.
    #[must_use]
    pub fn count(&self, value: &str) -> u64 {
        self.active()
            .values()
            .filter(|stored| stored.as_str() == value)
            .count() as u64
    }

    /// Opens a level; returns `false` when the limit rejects it.
    pub fn begin(&mut self) -> bool {
        let needed = if self.levels.is_empty() { 2 } else { 1 };
        if self.levels.len() + needed > self.max_open {
            return false;
        }
        if self.levels.is_empty() {
            self.levels.push(self.base.clone());
        }
        let top = self.active().clone();
        self.levels.push(top);
        true
    }

    /// Commits every level; the innermost becomes the new base.
    pub fn commit(&mut self) {
        if let Some(top) = self.levels.pop() {
            self.base = top;
            self.levels.clear();
        }
    }

    /// Discards the innermost level; returns `false` when none is open.
    pub fn rollback(&mut self) -> bool {
        self.levels.pop().is_some()
    }

    /// Returns the number of open levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the number of entries in the active map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active().len()
    }

    /// Returns `true` if the active map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// Iterates over every entry in the active map.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.active()
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns every distinct value in the active map.
    #[must_use]
    pub fn distinct_values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.active().values().map(String::as_str).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    fn active(&self) -> &HashMap<String, String> {
        self.levels.last().unwrap_or(&self.base)
    }

    fn active_mut(&mut self) -> &mut HashMap<String, String> {
        match self.levels.last_mut() {
            Some(level) => level,
            None => &mut self.base,
        }
    }
}

impl Default for ModelDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `op` to both the engine and the model, then asserts that
/// every observable outcome matches.
///
/// # Panics
///
/// Panics when the engine and the model diverge.
pub fn check_op(db: &mut Database, model: &mut ModelDb, op: &Op) {
    match op {
        Op::Put { key, value } => {
            db.put(key.clone(), value.clone());
            model.put(key, value);
        }
        Op::Remove { key } => {
            let engine = db.remove(key);
            let modeled = model.remove(key);
            assert_eq!(engine.is_ok(), modeled, "remove {key:?} diverged");
            if !modeled {
                assert_eq!(engine.unwrap_err(), CoreError::not_found(key.as_str()));
            }
        }
        Op::Retrieve { key } => {
            let engine = db.retrieve(key).ok().map(|entry| entry.value);
            let modeled = model.get(key).map(str::to_owned);
            assert_eq!(engine, modeled, "retrieve {key:?} diverged");
        }
        Op::Count { value } => {
            assert_eq!(
                db.count_entries(value).as_u64(),
                model.count(value),
                "count {value:?} diverged"
            );
        }
        Op::Begin => {
            let engine = db.begin().is_ok();
            let modeled = model.begin();
            assert_eq!(engine, modeled, "begin diverged");
        }
        Op::Commit => {
            db.commit();
            model.commit();
        }
        Op::Rollback => {
            let engine = db.rollback().is_ok();
            let modeled = model.rollback();
            assert_eq!(engine, modeled, "rollback diverged");
        }
    }
    check_consistency(db, model);
}

/// Asserts that the engine and the model agree on the whole observable
/// state: transaction depth, every entry, and the occurrence count of
/// every value currently stored.
///
/// # Panics
///
/// Panics when the engine and the model diverge.
pub fn check_consistency(db: &Database, model: &ModelDb) {
    assert_eq!(db.open_transactions(), model.depth(), "depth diverged");
    assert_eq!(db.entry_count(), model.len(), "entry count diverged");

    for (key, value) in model.entries() {
        match db.retrieve(key) {
            Ok(entry) => assert_eq!(entry.value, value, "value for {key:?} diverged"),
            Err(err) => panic!("engine lost key {key:?}: {err}"),
        }
    }
    for value in model.distinct_values() {
        assert_eq!(
            db.count_entries(value).as_u64(),
            model.count(value),
            "count for {value:?} diverged"
        );
    }
}
