//! Domain-specific assertion macros for lsline harnesses.
//!
//! These add context-rich failure messages that make it clear *which* listing
//! line broke *which* record invariant.

use lsline_core::FileRecord;

/// Assert that a record carries the expected timestamp (or `None`).
///
/// ```rust
/// assert_timestamp!(record, Some(minute(2023, 8, 12, 13, 56)));
/// ```
#[macro_export]
macro_rules! assert_timestamp {
    ($record:expr, $expected:expr) => {{
        let record: &lsline_core::FileRecord = &$record;
        let expected: Option<lsline_core::Timestamp> = $expected;
        if record.timestamp != expected {
            panic!(
                "assert_timestamp! failed:\n  expected: {:?}\n  actual:   {:?}\n  raw: {:?}",
                expected, record.timestamp, record.raw
            );
        }
    }};
}

/// Assert that a line is rejected as "not an entry" without an error.
///
/// ```rust
/// assert_not_entry!(parser, "total 42");
/// ```
#[macro_export]
macro_rules! assert_not_entry {
    ($parser:expr, $line:expr) => {{
        let line: &str = $line;
        match $parser.parse(line) {
            Ok(None) => {}
            Ok(Some(record)) => panic!(
                "assert_not_entry! failed: {:?} parsed as {:?}",
                line, record
            ),
            Err(err) => panic!("assert_not_entry! failed: {:?} raised {}", line, err),
        }
    }};
}

// ---------------------------------------------------------------------------
// Record invariant helpers
// ---------------------------------------------------------------------------

/// Every record must keep its raw line verbatim and have a non-empty name.
pub fn assert_record_invariants(record: &FileRecord, line: &str) {
    assert_eq!(record.raw, line, "raw must be the source line verbatim");
    assert!(
        !record.name.is_empty(),
        "record must have a non-empty name: {:?}",
        record.raw
    );
}
