//! Point-in-time images of the store.

use std::collections::HashMap;

/// A complete image of the store at one transaction level.
///
/// A snapshot holds the key/value entries together with a per-value
/// occurrence count. The count map is kept in lockstep with the entry
/// map: after every mutation, [`occurrences_of`](Self::occurrences_of)
/// for a value equals the number of keys currently mapped to it.
/// Values whose count drops back to zero stay in the count map with a
/// count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: HashMap<String, String>,
    occurrences: HashMap<String, u64>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, keeping occurrence counts in step.
    ///
    /// Replacing a key first decrements the count of its previous
    /// value, even when the new value is the same string.
    pub fn insert(&mut self, key: String, value: String) {
        let previous = self.entries.insert(key, value.clone());
        if let Some(previous) = previous {
            self.decrement(&previous);
        }
        self.increment(&value);
    }

    /// Removes an entry, returning its value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.entries.remove(key)?;
        self.decrement(&removed);
        Some(removed)
    }

    /// Returns the value stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns how many keys currently hold `value`.
    #[must_use]
    pub fn occurrences_of(&self, value: &str) -> u64 {
        self.occurrences.get(value).copied().unwrap_or(0)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries and occurrence counts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.occurrences.clear();
    }

    fn increment(&mut self, value: &str) {
        *self.occurrences.entry(value.to_owned()).or_insert(0) += 1;
    }

    // A value missing from the count map counts as zero and stays
    // untouched; present counts never go below zero.
    fn decrement(&mut self, value: &str) {
        if let Some(count) = self.occurrences.get_mut(value) {
            *count = count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(entries: &[(&str, &str)]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (key, value) in entries {
            snapshot.insert((*key).to_owned(), (*value).to_owned());
        }
        snapshot
    }

    /// Recounts occurrences from the entry map and compares with the
    /// maintained counts.
    fn counts_are_consistent(snapshot: &Snapshot) -> bool {
        snapshot.occurrences.iter().all(|(value, count)| {
            let scanned = snapshot
                .entries
                .values()
                .filter(|stored| *stored == value)
                .count() as u64;
            scanned == *count
        })
    }

    #[test]
    fn insert_tracks_occurrences() {
        let snapshot = snapshot_with(&[("a", "red"), ("b", "red"), ("c", "blue")]);
        assert_eq!(snapshot.occurrences_of("red"), 2);
        assert_eq!(snapshot.occurrences_of("blue"), 1);
        assert!(counts_are_consistent(&snapshot));
    }

    #[test]
    fn replacing_a_key_adjusts_both_counts() {
        let mut snapshot = snapshot_with(&[("a", "red")]);
        snapshot.insert("a".to_owned(), "blue".to_owned());
        assert_eq!(snapshot.get("a"), Some("blue"));
        assert_eq!(snapshot.occurrences_of("red"), 0);
        assert_eq!(snapshot.occurrences_of("blue"), 1);
        assert!(counts_are_consistent(&snapshot));
    }

    #[test]
    fn reinserting_the_same_value_keeps_the_count() {
        let mut snapshot = snapshot_with(&[("a", "red")]);
        snapshot.insert("a".to_owned(), "red".to_owned());
        assert_eq!(snapshot.occurrences_of("red"), 1);
        assert!(counts_are_consistent(&snapshot));
    }

    #[test]
    fn remove_decrements_the_count() {
        let mut snapshot = snapshot_with(&[("a", "red"), ("b", "red")]);
        assert_eq!(snapshot.remove("a"), Some("red".to_owned()));
        assert_eq!(snapshot.occurrences_of("red"), 1);
        assert!(!snapshot.contains_key("a"));
        assert!(counts_are_consistent(&snapshot));
    }

    #[test]
    fn remove_missing_key_is_none() {
        let mut snapshot = snapshot_with(&[("a", "red")]);
        assert_eq!(snapshot.remove("missing"), None);
        assert_eq!(snapshot.occurrences_of("red"), 1);
    }

    #[test]
    fn zero_counts_are_retained() {
        let mut snapshot = snapshot_with(&[("a", "red")]);
        snapshot.remove("a");
        assert_eq!(snapshot.occurrences.get("red"), Some(&0));
        assert_eq!(snapshot.occurrences_of("red"), 0);
    }

    #[test]
    fn unknown_value_counts_as_zero() {
        let snapshot = snapshot_with(&[("a", "red")]);
        assert_eq!(snapshot.occurrences_of("never-stored"), 0);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = snapshot_with(&[("a", "red")]);
        let copy = original.clone();
        original.insert("b".to_owned(), "red".to_owned());
        original.remove("a");

        assert_eq!(copy.get("a"), Some("red"));
        assert!(!copy.contains_key("b"));
        assert_eq!(copy.occurrences_of("red"), 1);
        assert_eq!(original.occurrences_of("red"), 1);
    }

    #[test]
    fn clear_drops_entries_and_counts() {
        let mut snapshot = snapshot_with(&[("a", "red"), ("b", "blue")]);
        snapshot.clear();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert_eq!(snapshot.occurrences_of("red"), 0);
        assert!(snapshot.occurrences.is_empty());
    }
}
