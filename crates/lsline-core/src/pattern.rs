//! Pattern definitions and the line matcher.
//!
//! A [`PatternDefinition`] binds one whole-line regex to an ordered list of
//! logical [`Slot`]s, one per capture group. [`PatternDefinition::matches`]
//! returns a [`MatchResult`] value that owns the captures for that single
//! line; extraction reads from the value, never from the definition.
//!
//! Every pattern is anchored at both ends on construction, so a line with
//! trailing garbage never matches. The `regex` engine runs in linear time,
//! which rules out catastrophic backtracking.

use regex::{Captures, Regex};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// Logical name of one capture slot in a listing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Entry type character (Unix convention).
    TypeFlag,
    /// Permission / attribute flag characters.
    Flags,
    /// Hard-link count or a link-count-like opaque token.
    LinkCount,
    /// Opaque protocol identifier token.
    Protocol,
    /// Owner name.
    Owner,
    /// Group name.
    Group,
    /// Size column, digits in the common case.
    Size,
    /// Three-letter English month abbreviation.
    Month,
    /// Day of month.
    Day,
    /// Four-digit year, present when the clock time is not.
    Year,
    /// Hour of a `HH:MM` clock time, present when the year is not.
    Hour,
    /// Minute of a `HH:MM` clock time.
    Minute,
    /// Entry name, possibly followed by trailing text such as a link target.
    Name,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Slot::TypeFlag => "type_flag",
            Slot::Flags => "flags",
            Slot::LinkCount => "link_count",
            Slot::Protocol => "protocol",
            Slot::Owner => "owner",
            Slot::Group => "group",
            Slot::Size => "size",
            Slot::Month => "month",
            Slot::Day => "day",
            Slot::Year => "year",
            Slot::Hour => "hour",
            Slot::Minute => "minute",
            Slot::Name => "name",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A pattern definition could not be built.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid listing pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("pattern declares {slots} slots but has {groups} capture groups")]
    SlotCount { slots: usize, groups: usize },
    #[error("slot `{0}` is declared more than once")]
    DuplicateSlot(Slot),
}

/// Invalid access to a [`MatchResult`]. These are contract violations by the
/// caller, not properties of the input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("no captures available: the line did not match")]
    NoMatch,
    #[error("slot index {index} out of range (pattern has {count} slots)")]
    OutOfRange { index: usize, count: usize },
    #[error("slot `{0}` is not defined by this pattern")]
    UnknownSlot(Slot),
    #[error("slot `{0}` did not participate in the match")]
    Absent(Slot),
}

// ---------------------------------------------------------------------------
// PatternDefinition
// ---------------------------------------------------------------------------

/// Immutable layout of one listing convention.
///
/// Slot `i` (1-based) of the definition is capture group `i` of the regex.
/// The definition is cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    source: String,
    regex: Regex,
    slots: Vec<Slot>,
}

impl PatternDefinition {
    /// Compile `pattern` as a full-line pattern whose capture groups are, in
    /// order, `slots`. Groups that should not be exposed must be written as
    /// `(?:...)`.
    pub fn new(pattern: &str, slots: &[Slot]) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;

        let groups = regex.captures_len() - 1;
        if groups != slots.len() {
            return Err(PatternError::SlotCount {
                slots: slots.len(),
                groups,
            });
        }
        for (i, slot) in slots.iter().enumerate() {
            if slots[..i].contains(slot) {
                return Err(PatternError::DuplicateSlot(*slot));
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            regex,
            slots: slots.to_vec(),
        })
    }

    /// Pattern text as given to [`PatternDefinition::new`], without anchors.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// 1-based position of `slot`, if the pattern defines it.
    pub fn index_of(&self, slot: Slot) -> Option<usize> {
        self.slots.iter().position(|s| *s == slot).map(|i| i + 1)
    }

    /// Attempt a full-line match. Never fails; a non-matching line yields a
    /// result whose [`MatchResult::is_match`] is `false`.
    pub fn matches<'p, 't>(&'p self, line: &'t str) -> MatchResult<'p, 't> {
        MatchResult {
            definition: self,
            captures: self.regex.captures(line),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

/// Outcome of matching one line. Scoped to a single parse call.
#[derive(Debug)]
pub struct MatchResult<'p, 't> {
    definition: &'p PatternDefinition,
    captures: Option<Captures<'t>>,
}

impl<'p, 't> MatchResult<'p, 't> {
    pub fn is_match(&self) -> bool {
        self.captures.is_some()
    }

    /// The whole matched text (always the whole line on success).
    pub fn matched_text(&self) -> Result<&'t str, SlotError> {
        let caps = self.captures.as_ref().ok_or(SlotError::NoMatch)?;
        Ok(caps.get(0).map_or("", |m| m.as_str()))
    }

    /// Captured text of the slot at 1-based `index`. `Ok(None)` means the slot
    /// exists but sat in an alternative that did not match.
    pub fn group(&self, index: usize) -> Result<Option<&'t str>, SlotError> {
        let caps = self.captures.as_ref().ok_or(SlotError::NoMatch)?;
        let count = self.definition.slot_count();
        if index == 0 || index > count {
            return Err(SlotError::OutOfRange { index, count });
        }
        Ok(caps.get(index).map(|m| m.as_str()))
    }

    /// Captured text of a named slot.
    pub fn get(&self, slot: Slot) -> Result<Option<&'t str>, SlotError> {
        if self.captures.is_none() {
            return Err(SlotError::NoMatch);
        }
        let index = self
            .definition
            .index_of(slot)
            .ok_or(SlotError::UnknownSlot(slot))?;
        self.group(index)
    }

    /// Like [`MatchResult::get`] but for slots every match must populate.
    pub fn require(&self, slot: Slot) -> Result<&'t str, SlotError> {
        self.get(slot)?.ok_or(SlotError::Absent(slot))
    }
}
