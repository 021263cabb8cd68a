//! Rolling weekday search: next Friday and next Friday the 13th.
//!
//! Both searches take the start date by value and return a new date, so a
//! caller can reuse its input across calls.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::trace;

use crate::error::DateCalcError;
use crate::types::DAYS_PER_WEEK;

const UNLUCKY_DAY: u32 = 13;

/// The first Friday strictly after `date`.
///
/// A Friday input advances a full week.
pub fn next_friday(date: NaiveDate) -> Result<NaiveDate, DateCalcError> {
    let ahead = days_until(date.weekday(), Weekday::Fri);
    let ahead = if ahead == 0 { DAYS_PER_WEEK } else { ahead };
    add_days(date, ahead)
}

/// The first Friday the 13th on or after the Friday that starts the search.
///
/// The search starts at `date` itself when it is a Friday, otherwise at the
/// next Friday, then steps a week at a time until the day of month is 13.
/// A Friday the 13th input is returned unchanged.
pub fn next_friday_the_13th(date: NaiveDate) -> Result<NaiveDate, DateCalcError> {
    let mut candidate = add_days(date, days_until(date.weekday(), Weekday::Fri))?;
    let mut steps = 0u32;

    while candidate.day() != UNLUCKY_DAY {
        candidate = add_days(candidate, DAYS_PER_WEEK)?;
        steps += 1;
    }

    trace!(%date, %candidate, steps, "found friday the 13th");
    Ok(candidate)
}

/// Days from `from` forward to the next `to`, 0 when they are the same weekday.
fn days_until(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_monday() + DAYS_PER_WEEK - from.num_days_from_monday()) % DAYS_PER_WEEK
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate, DateCalcError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(DateCalcError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_until_wraps_the_week() {
        assert_eq!(days_until(Weekday::Sat, Weekday::Fri), 6);
        assert_eq!(days_until(Weekday::Mon, Weekday::Fri), 4);
        assert_eq!(days_until(Weekday::Fri, Weekday::Fri), 0);
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(next_friday(NaiveDate::MAX), Err(DateCalcError::OutOfRange));
    }
}
