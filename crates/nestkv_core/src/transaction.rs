//! Nested transaction levels.

use crate::error::{CoreError, CoreResult};
use crate::snapshot::Snapshot;

/// A stack of open transaction levels.
///
/// Each level is a full [`Snapshot`] taken when the level was opened.
/// The top of the stack is the innermost level and receives all reads
/// and writes while any level is open. Lower levels are the restore
/// points that successive rollbacks fall back to.
#[derive(Debug)]
pub struct TransactionStack {
    levels: Vec<Snapshot>,
    max_open: usize,
}

impl TransactionStack {
    /// Creates an empty stack that allows at most `max_open` levels.
    #[must_use]
    pub fn new(max_open: usize) -> Self {
        Self {
            levels: Vec::new(),
            max_open,
        }
    }

    /// Returns the number of open levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if at least one level is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Returns the configured level limit.
    #[must_use]
    pub fn max_open(&self) -> usize {
        self.max_open
    }

    /// Returns the innermost open level, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Snapshot> {
        self.levels.last()
    }

    /// Returns the innermost open level mutably, if any.
    pub fn active_mut(&mut self) -> Option<&mut Snapshot> {
        self.levels.last_mut()
    }

    /// Opens a new level seeded from the current state.
    ///
    /// From the idle state this pushes two copies of `base`: one as the
    /// restore point a later rollback falls back to, one as the working
    /// level. A nested begin pushes a single copy of the innermost
    /// level.
    pub fn begin(&mut self, base: &Snapshot) -> CoreResult<()> {
        let needed = if self.levels.is_empty() { 2 } else { 1 };
        if self.levels.len() + needed > self.max_open {
            return Err(CoreError::too_many_transactions(self.max_open));
        }
        let seed = match self.levels.last() {
            Some(innermost) => innermost.clone(),
            None => {
                self.levels.push(base.clone());
                base.clone()
            }
        };
        self.levels.push(seed);
        Ok(())
    }

    /// Discards the innermost level.
    pub fn rollback(&mut self) -> CoreResult<()> {
        match self.levels.pop() {
            Some(_) => Ok(()),
            None => Err(CoreError::TransactionNotFound),
        }
    }

    /// Closes every open level and returns the innermost snapshot.
    ///
    /// Returns `None` when no level is open.
    pub fn commit(&mut self) -> Option<Snapshot> {
        let committed = self.levels.pop()?;
        self.levels.clear();
        Some(committed)
    }

    /// Discards every open level.
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
