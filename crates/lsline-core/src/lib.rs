//! lsline-core — directory-listing line parsing engine.
//!
//! Turns one line of server listing text into a structured [`FileRecord`].
//! Each server convention is an independent [`EntryParser`] selected by its
//! [`Convention`] identifier; nothing here guesses the convention.
//!
//! # Architecture
//!
//! ```text
//! EntryParser::parse(line)
//!    │
//!    ├──► PatternDefinition::matches(line) ──► MatchResult
//!    │
//!    └──► normalizer (size, month, timestamp) ──► FileRecord
//! ```
//!
//! The match step hands its captures to extraction as a value, so a parser
//! holds no per-call state and can be shared across threads.

pub mod config;
pub mod normalizer;
pub mod parser;
pub mod pattern;
pub mod types;

pub use parser::{parse_lines, Convention, EntryParser, ParseError};
pub use pattern::{MatchResult, PatternDefinition, PatternError, Slot, SlotError};
pub use types::{EntryType, FileRecord, Timestamp};
