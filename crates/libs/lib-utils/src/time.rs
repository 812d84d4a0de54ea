//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use std::fmt::Display;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a date the way a US-locale browser renders a short date (`M/D/YYYY`).
///
/// The day is taken in `time`'s own zone.
pub fn format_date<Tz>(time: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%-m/%-d/%Y").to_string()
}

/// Format a date as the visitor's local calendar day (`M/D/YYYY`).
pub fn format_local_date(time: DateTime<Utc>) -> String {
    format_date(time.with_timezone(&Local))
}

/// Move `time` forward (or backward, for negative `days`) by whole days.
pub fn add_days(time: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, Error> {
    Duration::try_days(days)
        .and_then(|delta| time.checked_add_signed(delta))
        .ok_or(Error::DateOutOfRange(days))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    DateOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
