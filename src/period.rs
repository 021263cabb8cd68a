//! Day counts and membership tests over pairs of ISO-8601 dates.

use crate::error::DateCalcError;
use crate::parse::parse_instant;
use crate::types::{DatePeriod, MILLIS_PER_DAY};

/// Days from `start` to `end`, counting both ends.
///
/// Measured as elapsed milliseconds floored to whole days, plus one. Inputs
/// that are not aligned to the same time of day can floor down a day.
pub fn days_between_inclusive(start: &str, end: &str) -> Result<i64, DateCalcError> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    let delta = end.timestamp_millis() - start.timestamp_millis();
    Ok(delta.div_euclid(MILLIS_PER_DAY) + 1)
}

/// Whether `date` falls in `period`: start inclusive, end EXCLUSIVE.
pub fn is_within_period(date: &str, period: &DatePeriod) -> Result<bool, DateCalcError> {
    let date = parse_instant(date)?;
    let start = parse_instant(&period.start)?;
    let end = parse_instant(&period.end)?;
    Ok(start <= date && date < end)
}
