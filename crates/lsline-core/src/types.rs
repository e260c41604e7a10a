//! Core types for lsline-core.
//!
//! This module defines the structured output of the parsing engine: the
//! [`FileRecord`], its [`EntryType`], and the [`Timestamp`] with its
//! precision.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One parsed directory entry.
///
/// `kind` and `name` are always populated. Numeric and timestamp fields are
/// fail-soft: if their sub-parse failed they are left as `None` and the rest of
/// the record is still produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Listing line exactly as it was handed to the parser.
    pub raw: String,
    pub kind: EntryType,
    /// Owner name, possibly empty.
    pub owner: String,
    /// Group name, possibly empty.
    pub group: String,
    /// Size in bytes, `None` when the size column did not convert.
    pub size: Option<u64>,
    /// Hard-link count, for conventions that carry a numeric one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_links: Option<u32>,
    /// Modification time, `None` when the date columns did not convert.
    pub timestamp: Option<Timestamp>,
    /// Entry name. Conventions that do not split link targets leave any
    /// trailing text here as-is.
    pub name: String,
    /// Symbolic-link target, for conventions that split it off the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
}

impl FileRecord {
    /// A record with only the mandatory fields set.
    pub fn new(raw: impl Into<String>, kind: EntryType, name: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            kind,
            owner: String::new(),
            group: String::new(),
            size: None,
            hard_links: None,
            timestamp: None,
            name: name.into(),
            link_target: None,
        }
    }
}

/// What kind of filesystem object an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    File,
    Directory,
    SymbolicLink,
    Unknown,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::File => write!(f, "file"),
            EntryType::Directory => write!(f, "dir"),
            EntryType::SymbolicLink => write!(f, "link"),
            EntryType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A listing timestamp. Listings carry either a full date without a clock
/// time, or a date plus hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timestamp {
    /// Date-only precision (the listing showed an explicit year).
    Day(NaiveDate),
    /// Minute precision (the listing showed `HH:MM`, year was inferred).
    Minute(NaiveDateTime),
}

impl Timestamp {
    pub fn date(&self) -> NaiveDate {
        match self {
            Timestamp::Day(date) => *date,
            Timestamp::Minute(dt) => dt.date(),
        }
    }

    /// Time of day, if the listing carried one.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Timestamp::Day(_) => None,
            Timestamp::Minute(dt) => Some(dt.time()),
        }
    }

    /// Render with `date_format` or `minute_format` depending on precision.
    pub fn format(&self, date_format: &str, minute_format: &str) -> String {
        match self {
            Timestamp::Day(date) => date.format(date_format).to_string(),
            Timestamp::Minute(dt) => dt.format(minute_format).to_string(),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Timestamp::Minute(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}
