//! Date calculation utilities.
//!
//! Features:
//! - Leap years, days in month, week numbers and quarters
//! - Weekend counting for a month
//! - Next Friday and next Friday-the-13th search
//! - Inclusive day counts and period membership
//! - Work/off-day schedule generation
//! - Timestamp conversion and fixed-format date strings

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod parse;
pub mod period;
pub mod schedule;
pub mod search;
pub mod types;

pub use calendar::{
    count_weekend_days, days_in_month, is_leap_year, is_leap_year_of, quarter_of, week_number,
};
pub use error::DateCalcError;
pub use formatter::{
    day_name, format_date_time, format_schedule_date, time_of_day, to_timestamp, weekday_name,
};
pub use parse::{parse_instant, parse_schedule_date};
pub use period::{days_between_inclusive, is_within_period};
pub use schedule::generate_schedule;
pub use search::{next_friday, next_friday_the_13th};
pub use types::{DatePeriod, TimeBasis};
