//! Benchmark utilities for nestkv.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use nestkv_core::Database;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generates `count` random alphanumeric keys of length 8.
pub fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (0..8).map(|_| rng.sample(Alphanumeric) as char).collect())
        .collect()
}

/// Creates a database prefilled with `count` entries spread over
/// `values` distinct values, returning the keys used.
pub fn prefilled_db(count: usize, values: usize) -> (Database, Vec<String>) {
    let keys = random_keys(count);
    let mut db = Database::new();
    for (index, key) in keys.iter().enumerate() {
        db.put(key.clone(), format!("v{}", index % values));
    }
    (db, keys)
}
