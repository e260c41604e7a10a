//! Entry parsers — one independent implementation per listing convention.
//!
//! Callers pick a [`Convention`] explicitly and build its parser with
//! [`Convention::parser`]. There is no detection step and no fallback that
//! tries every known convention.

mod enterprise;
mod unix;

pub use enterprise::EnterpriseUnixParser;
pub use unix::UnixParser;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::normalizer::{self, DateFields, FieldError, YearOrClock};
use crate::pattern::{MatchResult, PatternError, Slot, SlotError};
use crate::types::{FileRecord, Timestamp};

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Errors surfaced by [`EntryParser::parse`]. Input that does not look like an
/// entry is not an error; it yields `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("slot access failed: {0}")]
    Slot(#[from] SlotError),
}

/// Match-and-extract for one listing convention.
pub trait EntryParser: Send + Sync {
    /// Which convention this parser implements.
    fn convention(&self) -> Convention;

    /// Parse one line with its terminator already stripped.
    ///
    /// Returns `Ok(None)` for headers, blank lines and anything else that does
    /// not fit the convention's layout.
    fn parse(&self, line: &str) -> Result<Option<FileRecord>, ParseError>;
}

/// Parse every line of `text` with `parser`, skipping lines that are not
/// entries. Stops at the first [`ParseError`].
pub fn parse_lines(parser: &dyn EntryParser, text: &str) -> Result<Vec<FileRecord>, ParseError> {
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(record) = parser.parse(line)? {
            records.push(record);
        }
    }
    tracing::debug!(
        convention = %parser.convention(),
        records = records.len(),
        "parsed listing"
    );
    Ok(records)
}

// ---------------------------------------------------------------------------
// Convention
// ---------------------------------------------------------------------------

/// Identifier of a supported listing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Enterprise Unix servers: ten upper-case attribute flags and a protocol
    /// token ahead of the owner.
    EnterpriseUnix,
    /// Classic `ls -l` output.
    Unix,
}

impl Convention {
    pub const ALL: [Convention; 2] = [Convention::EnterpriseUnix, Convention::Unix];

    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::EnterpriseUnix => "enterprise-unix",
            Convention::Unix => "unix",
        }
    }

    /// Build this convention's parser. `reference_date` pins the "today" used
    /// to infer missing years; `None` reads the local clock on every parse.
    pub fn parser(
        self,
        reference_date: Option<NaiveDate>,
    ) -> Result<Box<dyn EntryParser>, PatternError> {
        Ok(match self {
            Convention::EnterpriseUnix => Box::new(
                EnterpriseUnixParser::new()?.with_reference_date(reference_date),
            ),
            Convention::Unix => Box::new(UnixParser::new()?.with_reference_date(reference_date)),
        })
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised convention identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown listing convention `{0}` (expected one of: enterprise-unix, unix)")]
pub struct UnknownConvention(pub String);

impl std::str::FromStr for Convention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownConvention(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Shared extraction helpers
// ---------------------------------------------------------------------------

fn today(reference_date: Option<NaiveDate>) -> NaiveDate {
    reference_date.unwrap_or_else(|| Local::now().date_naive())
}

/// Keep a converted field or log the failure and leave the field unset.
fn soft<T>(line: &str, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(%err, line, "field left unset");
            None
        }
    }
}

/// Read the month/day/year-or-clock slots and resolve the timestamp.
///
/// Slot errors propagate; conversion errors leave the timestamp unset.
fn extract_timestamp(
    m: &MatchResult<'_, '_>,
    line: &str,
    reference_date: Option<NaiveDate>,
) -> Result<Option<Timestamp>, ParseError> {
    let month = m.require(Slot::Month)?;
    let day = m.require(Slot::Day)?;
    let year = m.get(Slot::Year)?;
    let hour = m.get(Slot::Hour)?;
    let minute = m.get(Slot::Minute)?;

    let resolved = YearOrClock::from_captures(year, hour, minute).and_then(|year_or_clock| {
        normalizer::resolve_timestamp(
            DateFields {
                month,
                day,
                year_or_clock,
            },
            today(reference_date),
        )
    });
    Ok(soft(line, resolved))
}
