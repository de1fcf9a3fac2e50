//! Property-based test generators using proptest.

use crate::model::Op;
use proptest::prelude::*;

/// Strategy for generating keys accepted by the API boundary.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-Za-z]{1,10}").expect("Invalid regex")
}

/// Strategy for generating values accepted by the API boundary.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-Za-z]{1,10}").expect("Invalid regex")
}

/// Strategy for keys drawn from a small pool, so that random sequences
/// revisit the same keys often.
pub fn dense_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]").expect("Invalid regex")
}

/// Strategy for values drawn from a small pool.
pub fn dense_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-3]").expect("Invalid regex")
}

/// Strategy for a single random operation.
///
/// Writes dominate, and keys and values come from the dense pools so
/// that puts collide, removes hit, and counts exceed one.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (dense_key_strategy(), dense_value_strategy())
            .prop_map(|(key, value)| Op::Put { key, value }),
        2 => dense_key_strategy().prop_map(|key| Op::Remove { key }),
        2 => dense_key_strategy().prop_map(|key| Op::Retrieve { key }),
        2 => dense_value_strategy().prop_map(|value| Op::Count { value }),
        2 => Just(Op::Begin),
        1 => Just(Op::Commit),
        1 => Just(Op::Rollback),
    ]
}

/// Strategy for a random operation sequence.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..max_len)
}
