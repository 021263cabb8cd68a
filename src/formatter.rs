//! Timestamp conversion and fixed-format date strings.

use chrono::{DateTime, Datelike, Month, NaiveDate, Timelike, Utc, Weekday};

use crate::error::DateCalcError;
use crate::parse::parse_instant;
use crate::types::{SCHEDULE_DATE_FORMAT, TimeBasis, WEEKDAY_NAMES};

/// `M/D/YYYY, h:MM:SS AM|PM`
const DATE_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Milliseconds since 1970-01-01T00:00:00Z for a date string.
pub fn to_timestamp(input: &str) -> Result<i64, DateCalcError> {
    parse_instant(input).map(|instant| instant.timestamp_millis())
}

/// Time of day as zero-padded 24-hour `HH:MM:SS`.
pub fn time_of_day<T: Timelike>(value: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    )
}

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// English weekday name of a date string, read on the given basis.
pub fn day_name(input: &str, basis: TimeBasis) -> Result<&'static str, DateCalcError> {
    let instant = parse_instant(input)?;
    Ok(weekday_name(basis.resolve(instant).weekday()))
}

/// Format an instant from its UTC fields as `M/D/YYYY, h:MM:SS AM|PM`.
///
/// Month, day and hour are not padded; the hour uses a 12-hour clock where
/// midnight and noon are both 12. Hour 0 prints as `12 ... AM`, not `0 ... AM`.
pub fn format_date_time(instant: DateTime<Utc>) -> String {
    instant.format(DATE_TIME_FORMAT).to_string()
}

/// Format a date as zero-padded `DD-MM-YYYY`.
pub fn format_schedule_date(date: NaiveDate) -> String {
    date.format(SCHEDULE_DATE_FORMAT).to_string()
}

/// Parse month from number (1-12) or English name (full or abbreviated).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    s.parse::<Month>().ok().map(|month| month.number_from_month())
}
