//! Classic Unix `ls -l` listing convention.
//!
//! ```text
//! drwxr-xr-x   2 alice staff      4096 Jan  1  2020 docs
//! lrwxrwxrwx   1 alice staff        11 Mar  5 09:10 current -> releases/42
//! crw-rw----   1 root  tty     4,   1 Jun 10 08:00 tty1
//! ```
//!
//! Owner and group may each be missing. Device files show `major, minor` in
//! place of a size; those records keep their size unset.

use chrono::NaiveDate;

use super::{extract_timestamp, soft, Convention, EntryParser, ParseError};
use crate::normalizer;
use crate::pattern::{PatternDefinition, PatternError, Slot};
use crate::types::{EntryType, FileRecord};

const PATTERN: &str = concat!(
    r"([bcdelfmpSs-])",
    r"([rwxsStTL-]{9})\+?\s*",
    r"(\d+)\s+",
    r"(?:(\S+)\s+)?",
    r"(?:(\S+)\s+)?",
    r"(\d+(?:,\s*\d+)?)\s+",
    r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+",
    r"(\d{1,2})\s+",
    r"(?:(\d{4})|(\d{1,2}):(\d{2}))\s",
    r"(.+)",
);

const SLOTS: &[Slot] = &[
    Slot::TypeFlag,
    Slot::Flags,
    Slot::LinkCount,
    Slot::Owner,
    Slot::Group,
    Slot::Size,
    Slot::Month,
    Slot::Day,
    Slot::Year,
    Slot::Hour,
    Slot::Minute,
    Slot::Name,
];

const LINK_ARROW: &str = " -> ";

/// Parser for `ls -l` style listings.
#[derive(Debug, Clone)]
pub struct UnixParser {
    definition: PatternDefinition,
    reference_date: Option<NaiveDate>,
}

impl UnixParser {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            definition: PatternDefinition::new(PATTERN, SLOTS)?,
            reference_date: None,
        })
    }

    /// Resolve `HH:MM` timestamps against `date` instead of the local clock.
    pub fn with_reference_date(mut self, date: Option<NaiveDate>) -> Self {
        self.reference_date = date;
        self
    }

    pub fn definition(&self) -> &PatternDefinition {
        &self.definition
    }
}

fn entry_type(flag: &str) -> EntryType {
    match flag {
        "d" => EntryType::Directory,
        "l" | "e" => EntryType::SymbolicLink,
        "-" | "f" | "b" | "c" => EntryType::File,
        _ => EntryType::Unknown,
    }
}

impl EntryParser for UnixParser {
    fn convention(&self) -> Convention {
        Convention::Unix
    }

    fn parse(&self, line: &str) -> Result<Option<FileRecord>, ParseError> {
        let m = self.definition.matches(line);
        if !m.is_match() {
            tracing::trace!(line, "not a unix entry");
            return Ok(None);
        }

        let kind = entry_type(m.require(Slot::TypeFlag)?);
        let name = m.require(Slot::Name)?;
        let (name, link_target) = match (kind, name.split_once(LINK_ARROW)) {
            (EntryType::SymbolicLink, Some((name, target))) => (name, Some(target.to_string())),
            _ => (name, None),
        };

        let mut record = FileRecord::new(line, kind, name);
        record.link_target = link_target;
        record.owner = m.get(Slot::Owner)?.unwrap_or_default().to_string();
        record.group = m.get(Slot::Group)?.unwrap_or_default().to_string();
        record.hard_links = soft(
            line,
            normalizer::parse_number("link_count", m.require(Slot::LinkCount)?),
        );
        record.size = soft(line, normalizer::parse_size(m.require(Slot::Size)?));
        record.timestamp = extract_timestamp(&m, line, self.reference_date)?;

        Ok(Some(record))
    }
}
