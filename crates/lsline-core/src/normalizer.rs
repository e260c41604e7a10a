//! Field normalizer — converts captured listing text into typed values.
//!
//! Every function here is pure and independent: a failure converting one
//! field is reported as a [`FieldError`] for that field alone, and the caller
//! decides what default to leave in its place.

use chrono::{Datelike, Duration, NaiveDate};
use phf::phf_map;
use std::str::FromStr;
use thiserror::Error;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Month table
// ---------------------------------------------------------------------------

/// English month abbreviations to zero-based month index. Case-sensitive.
static MONTHS: phf::Map<&'static str, u32> = phf_map! {
    "Jan" => 0,
    "Feb" => 1,
    "Mar" => 2,
    "Apr" => 3,
    "May" => 4,
    "Jun" => 5,
    "Jul" => 6,
    "Aug" => 7,
    "Sep" => 8,
    "Oct" => 9,
    "Nov" => 10,
    "Dec" => 11,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A single field failed to convert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field}: `{value}` is not a valid number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown month abbreviation `{0}`")]
    UnknownMonth(String),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("{hour:02}:{minute:02} is not a clock time")]
    InvalidTime { hour: u32, minute: u32 },
    #[error("neither a year nor a clock time was captured")]
    MissingYearOrClock,
}

// ---------------------------------------------------------------------------
// Numbers and months
// ---------------------------------------------------------------------------

/// Parse an unsigned decimal field. Empty text, non-digits and overflow all
/// fail.
pub fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, FieldError> {
    value.parse().map_err(|_| FieldError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Byte size column.
pub fn parse_size(value: &str) -> Result<u64, FieldError> {
    parse_number("size", value)
}

/// Zero-based month index of a three-letter abbreviation (`Jan` is 0).
pub fn month_index(abbr: &str) -> Result<u32, FieldError> {
    MONTHS
        .get(abbr)
        .copied()
        .ok_or_else(|| FieldError::UnknownMonth(abbr.to_string()))
}

// ---------------------------------------------------------------------------
// Timestamp disambiguation
// ---------------------------------------------------------------------------

/// The third date column of a listing: an explicit year or a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearOrClock<'a> {
    Year(&'a str),
    Clock { hour: &'a str, minute: &'a str },
}

impl<'a> YearOrClock<'a> {
    /// Pick whichever alternative matched. Exactly one is expected.
    pub fn from_captures(
        year: Option<&'a str>,
        hour: Option<&'a str>,
        minute: Option<&'a str>,
    ) -> Result<Self, FieldError> {
        match (year, hour, minute) {
            (Some(year), _, _) => Ok(YearOrClock::Year(year)),
            (None, Some(hour), Some(minute)) => Ok(YearOrClock::Clock { hour, minute }),
            _ => Err(FieldError::MissingYearOrClock),
        }
    }
}

/// Raw date columns of one listing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields<'a> {
    pub month: &'a str,
    pub day: &'a str,
    pub year_or_clock: YearOrClock<'a>,
}

/// Resolve the date columns against `today`.
///
/// An explicit year gives a date-only timestamp. A clock time takes the year
/// of `today`, minus one when the entry's month is strictly later than the
/// month of `today`; the result has minute precision.
///
/// Days past the end of the month roll over into the next one and day `0` is
/// the last day of the previous month, so `Feb 30 2023` is 2023-03-02.
pub fn resolve_timestamp(fields: DateFields<'_>, today: NaiveDate) -> Result<Timestamp, FieldError> {
    let month0 = month_index(fields.month)?;
    let day: u32 = parse_number("day", fields.day)?;

    match fields.year_or_clock {
        YearOrClock::Year(year) => {
            let year: i32 = parse_number("year", year)?;
            Ok(Timestamp::Day(calendar_date(year, month0, day)?))
        }
        YearOrClock::Clock { hour, minute } => {
            let hour: u32 = parse_number("hour", hour)?;
            let minute: u32 = parse_number("minute", minute)?;

            let mut year = today.year();
            if month0 > today.month0() {
                year -= 1;
            }

            let date = calendar_date(year, month0, day)?;
            let dt = date
                .and_hms_opt(hour, minute, 0)
                .ok_or(FieldError::InvalidTime { hour, minute })?;
            Ok(Timestamp::Minute(dt))
        }
    }
}

fn calendar_date(year: i32, month0: u32, day: u32) -> Result<NaiveDate, FieldError> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .and_then(|first| first.checked_add_signed(Duration::days(i64::from(day) - 1)))
        .ok_or(FieldError::InvalidDate {
            year,
            month: month0 + 1,
            day,
        })
}
