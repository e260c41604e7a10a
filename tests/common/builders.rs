//! Test builders — ergonomic constructors for parsers and expected records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::NaiveDate;
use lsline_core::{Convention, EntryParser, EntryType, FileRecord, Timestamp};

/// "Today" for every harness: 2024-06-15.
pub const REFERENCE_DATE: (i32, u32, u32) = (2024, 6, 15);

pub fn reference_date() -> NaiveDate {
    let (y, m, d) = REFERENCE_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A parser for `convention` pinned to [`REFERENCE_DATE`].
pub fn parser(convention: Convention) -> Box<dyn EntryParser> {
    convention.parser(Some(reference_date())).unwrap()
}

/// Parse `line` and panic unless it yields a record.
pub fn parse_entry(convention: Convention, line: &str) -> FileRecord {
    parser(convention)
        .parse(line)
        .unwrap_or_else(|err| panic!("parse error on {line:?}: {err}"))
        .unwrap_or_else(|| panic!("expected an entry for {line:?}"))
}

pub fn day(y: i32, m: u32, d: u32) -> Timestamp {
    Timestamp::Day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub fn minute(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
    Timestamp::Minute(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap(),
    )
}

// ---------------------------------------------------------------------------
// FileRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`FileRecord`] values.
///
/// # Example
///
/// ```rust
/// let expected = FileRecordBuilder::new(line, "QUADTEST")
///     .owner("QUA1I1")
///     .group("18128")
///     .size(41)
///     .timestamp(minute(2023, 8, 12, 13, 56))
///     .build();
/// ```
pub struct FileRecordBuilder {
    record: FileRecord,
}

impl FileRecordBuilder {
    pub fn new(raw: &str, name: &str) -> Self {
        Self {
            record: FileRecord::new(raw, EntryType::File, name),
        }
    }

    pub fn kind(mut self, kind: EntryType) -> Self {
        self.record.kind = kind;
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.record.owner = owner.to_string();
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.record.group = group.to_string();
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.record.size = Some(size);
        self
    }

    pub fn hard_links(mut self, links: u32) -> Self {
        self.record.hard_links = Some(links);
        self
    }

    pub fn timestamp(mut self, ts: Timestamp) -> Self {
        self.record.timestamp = Some(ts);
        self
    }

    pub fn link_target(mut self, target: &str) -> Self {
        self.record.link_target = Some(target.to_string());
        self
    }

    pub fn build(self) -> FileRecord {
        self.record
    }
}
