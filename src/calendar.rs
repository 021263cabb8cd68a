//! Calendar arithmetic: leap years, month lengths, week numbers, weekends and quarters.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::DateCalcError;
use crate::types::DAYS_PER_WEEK;

/// Check if a year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    // Divisible by 4, except centuries unless divisible by 400
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Check if the year of `date` is a leap year.
pub fn is_leap_year_of<D: Datelike>(date: &D) -> bool {
    is_leap_year(date.year())
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(month: u32, year: i32) -> Result<u32, DateCalcError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(DateCalcError::InvalidArgument { month }),
    }
}

/// Week of the year, Monday-first, where week 1 is the week containing January 1.
///
/// This is not ISO 8601: a date in early January is never assigned to the last
/// week of the previous year, and week 1 may hold as little as one day.
pub fn week_number(date: NaiveDate) -> u32 {
    let year = date.year();
    // Monday = 1 .. Sunday = 7
    let jan1_weekday = first_day_of_year(year).number_from_monday();

    // Months before date.month() are always in 1..=12
    let ordinal: u32 = (1..date.month())
        .map_while(|month| days_in_month(month, year).ok())
        .sum::<u32>()
        + date.day();
    debug_assert_eq!(ordinal, date.ordinal());

    (ordinal + jan1_weekday - 1).div_ceil(DAYS_PER_WEEK)
}

/// Count the Saturdays and Sundays in `month` of `year`.
pub fn count_weekend_days(month: u32, year: i32) -> Result<u32, DateCalcError> {
    let days = days_in_month(month, year)?;
    let count = (1..=days)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| is_weekend(date.weekday()))
        .count();
    Ok(count as u32)
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Quarter (1-4) of the month field of `date`.
///
/// For a `DateTime<Utc>` this is the UTC month.
pub fn quarter_of<D: Datelike>(date: &D) -> u32 {
    (date.month0() / 3) + 1
}

/// Calculate the weekday of January 1 using Zeller's congruence.
fn first_day_of_year(year: i32) -> Weekday {
    // January counts as month 13 of the previous year
    let m: i32 = 13;
    let q: i32 = 1;
    let year_i = year - 1;
    let k = year_i.rem_euclid(100);
    let j = year_i.div_euclid(100);

    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        _ => Weekday::Fri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeller_matches_chrono() {
        for year in [1, 4, 99, 100, 1600, 1752, 1900, 1970, 2000, 2023, 2024, 2100] {
            let expected = NaiveDate::from_ymd_opt(year, 1, 1).unwrap().weekday();
            assert_eq!(first_day_of_year(year), expected, "year {year}");
        }
    }
}
