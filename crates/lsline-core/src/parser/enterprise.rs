//! Enterprise Unix listing convention.
//!
//! ```text
//! -C--E-----FTP B QUA1I1      18128       41 Aug 12 13:56 QUADTEST
//! ```
//!
//! Ten attribute flags, an opaque token glued to them, a protocol token,
//! owner, group, size, then `Mon DD` and either `YYYY` or `HH:MM`. Everything
//! after the single blank that ends the date columns is the name, left
//! unsplit; it may start with blanks but must contain a non-blank.

use chrono::NaiveDate;

use super::{extract_timestamp, soft, Convention, EntryParser, ParseError};
use crate::normalizer;
use crate::pattern::{PatternDefinition, PatternError, Slot};
use crate::types::{EntryType, FileRecord};

const PATTERN: &str = concat!(
    r"([A-Z-]{10})",
    r"(\S*)\s*",
    r"(\S+)\s*",
    r"(\S*)\s*",
    r"(\d*)\s*",
    r"(\d*)\s*",
    r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s*",
    r"((?:[012]?\d)|(?:3[01]))\s*",
    r"(?:(\d{4})|((?:[01]\d)|(?:2[0-3])):([0-5]\d))\s",
    r"(.*\S.*)",
);

const SLOTS: &[Slot] = &[
    Slot::Flags,
    Slot::LinkCount,
    Slot::Protocol,
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

/// Parser for the enterprise Unix convention. Every entry is reported as a
/// plain file; the flags are not decoded.
#[derive(Debug, Clone)]
pub struct EnterpriseUnixParser {
    definition: PatternDefinition,
    reference_date: Option<NaiveDate>,
}

impl EnterpriseUnixParser {
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

impl EntryParser for EnterpriseUnixParser {
    fn convention(&self) -> Convention {
        Convention::EnterpriseUnix
    }

    fn parse(&self, line: &str) -> Result<Option<FileRecord>, ParseError> {
        let m = self.definition.matches(line);
        if !m.is_match() {
            tracing::trace!(line, "not an enterprise-unix entry");
            return Ok(None);
        }

        let mut record = FileRecord::new(line, EntryType::File, m.require(Slot::Name)?);
        record.owner = m.get(Slot::Owner)?.unwrap_or_default().to_string();
        record.group = m.get(Slot::Group)?.unwrap_or_default().to_string();
        record.size = soft(line, normalizer::parse_size(m.require(Slot::Size)?));
        record.timestamp = extract_timestamp(&m, line, self.reference_date)?;

        Ok(Some(record))
    }
}
