//! Common utilities for integration tests

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{
    assert_ascending,
    bless_mode,
    compare_text,
    seeded_inputs,
    snapshot_path,
    write_or_compare_text,
};
