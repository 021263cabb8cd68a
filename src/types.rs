//! Type definitions and constants shared by the date calculations.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use clap::ValueEnum;

/// Which calendar fields of an instant are read: UTC or the system local zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TimeBasis {
    /// Read fields in UTC.
    #[default]
    Utc,
    /// Read fields in the local time zone of the running process.
    Local,
}

impl TimeBasis {
    /// Resolve an instant into wall-clock fields for this basis.
    pub fn resolve(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeBasis::Utc => instant.naive_utc(),
            TimeBasis::Local => instant.with_timezone(&Local).naive_local(),
        }
    }
}

/// A pair of string-encoded dates.
///
/// The encoding depends on the operation: ISO-8601 for [`crate::is_within_period`],
/// `DD-MM-YYYY` for [`crate::generate_schedule`]. `start <= end` is assumed and
/// never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePeriod {
    pub start: String,
    pub end: String,
}

impl DatePeriod {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        DatePeriod {
            start: start.into(),
            end: end.into(),
        }
    }
}

// English weekday names indexed by days from Sunday
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const DAYS_PER_WEEK: u32 = 7;

// chrono format strings
pub const SCHEDULE_DATE_FORMAT: &str = "%d-%m-%Y";
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const ISO_NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const UTC_TEXT_DATE_TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";

// Suffixes accepted after UTC_TEXT_DATE_TIME_FORMAT
pub const UTC_SUFFIXES: [&str; 2] = [" UTC", " GMT"];
