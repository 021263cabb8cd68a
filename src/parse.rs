//! Parsing of date strings into chrono values.
//!
//! Accepted instant formats, tried in order:
//! - RFC 3339 with offset: `2024-01-30T00:00:00.000Z`
//! - ISO date-time without offset, read as UTC: `2024-01-30T08:15:00`
//! - ISO date, UTC midnight: `2024-01-30`
//! - Text form with UTC/GMT suffix: `04 Dec 1995 00:12:00 UTC`

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DateCalcError;
use crate::types::{
    ISO_DATE_FORMAT, ISO_NAIVE_DATE_TIME_FORMAT, SCHEDULE_DATE_FORMAT, UTC_SUFFIXES,
    UTC_TEXT_DATE_TIME_FORMAT,
};

/// Parse a string into an instant.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, DateCalcError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, ISO_NAIVE_DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT) {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    if let Some(body) = UTC_SUFFIXES.iter().find_map(|suffix| s.strip_suffix(suffix))
        && let Ok(naive) = NaiveDateTime::parse_from_str(body, UTC_TEXT_DATE_TIME_FORMAT)
    {
        return Ok(naive.and_utc());
    }

    Err(DateCalcError::invalid_date(input))
}

/// Parse a `DD-MM-YYYY` string.
pub fn parse_schedule_date(input: &str) -> Result<NaiveDate, DateCalcError> {
    NaiveDate::parse_from_str(input.trim(), SCHEDULE_DATE_FORMAT)
        .map_err(|_| DateCalcError::invalid_date(input))
}

/// Parse a plain `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DateCalcError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT)
        .map_err(|_| DateCalcError::invalid_date(input))
}
