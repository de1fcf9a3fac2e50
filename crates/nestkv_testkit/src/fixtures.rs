//! Test fixtures and database helpers.

use nestkv_core::Database;

/// Creates an empty database with default configuration.
#[must_use]
pub fn fresh_db() -> Database {
    Database::new()
}

/// Creates a database seeded with the given entries.
#[must_use]
pub fn db_with_entries(entries: &[(&str, &str)]) -> Database {
    let mut db = fresh_db();
    for (key, value) in entries {
        db.put(*key, *value);
    }
    db
}

/// Runs a test against a fresh database.
///
/// # Example
///
/// ```
/// use nestkv_testkit::fixtures::with_db;
///
/// with_db(|db| {
///     db.put("alpha", "1");
///     assert_eq!(db.entry_count(), 1);
/// });
/// ```
pub fn with_db<F, R>(test: F) -> R
where
    F: FnOnce(&mut Database) -> R,
{
    let mut db = fresh_db();
    test(&mut db)
}
