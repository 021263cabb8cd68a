//! Command-line argument parsing using clap.
//!
//! Each library operation is a subcommand. Optional date arguments default to
//! today, which can be pinned with `DATECALC_TODAY=YYYY-MM-DD`.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::calendar::{count_weekend_days, days_in_month, is_leap_year, quarter_of, week_number};
use crate::error::DateCalcError;
use crate::formatter::{day_name, format_date_time, parse_month, time_of_day, to_timestamp};
use crate::parse::{parse_instant, parse_iso_date};
use crate::period::{days_between_inclusive, is_within_period};
use crate::schedule::generate_schedule;
use crate::search::{next_friday, next_friday_the_13th};
use crate::types::{DatePeriod, TimeBasis};

/// Environment variable that overrides today's date.
pub const TODAY_ENV: &str = "DATECALC_TODAY";

#[derive(Parser, Debug)]
#[command(name = "datecalc")]
#[command(about = "Date calculations: calendar arithmetic, periods and work schedules", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read calendar fields in UTC or local time.
    #[arg(
        long,
        global = true,
        env = "DATECALC_BASIS",
        default_value = "utc",
        value_name = "basis"
    )]
    pub basis: TimeBasis,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Milliseconds since the Unix epoch.
    Timestamp { date: String },

    /// Time of day as HH:MM:SS.
    Time { date: String },

    /// English weekday name.
    DayName { date: String },

    /// Format as M/D/YYYY, h:MM:SS AM|PM (UTC fields).
    Format { date: String },

    /// Whether a year is a leap year.
    LeapYear { year: i32 },

    /// Number of days in a month (1-12 or name).
    DaysInMonth {
        #[arg(value_parser = month_value)]
        month: u32,
        year: i32,
    },

    /// Days between two dates, both ends included.
    DaysBetween { start: String, end: String },

    /// Whether a date is in [start, end).
    InPeriod {
        date: String,
        start: String,
        end: String,
    },

    /// Number of Saturdays and Sundays in a month.
    Weekends {
        #[arg(value_parser = month_value)]
        month: u32,
        year: i32,
    },

    /// Monday-first week number, week 1 contains January 1.
    WeekNumber { date: Option<String> },

    /// The next Friday strictly after the date.
    NextFriday { date: Option<String> },

    /// The next Friday the 13th.
    #[command(name = "friday13")]
    FridayThe13th { date: Option<String> },

    /// Quarter of the year (1-4).
    Quarter { date: Option<String> },

    /// Work days of a DD-MM-YYYY period for a work/off pattern.
    Schedule {
        start: String,
        end: String,

        /// Consecutive working days.
        #[arg(short = 'w', long = "work", allow_negative_numbers = true)]
        work_days: i64,

        /// Consecutive days off.
        #[arg(short = 'o', long = "off", allow_negative_numbers = true)]
        off_days: i64,
    },
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Examples:
  datecalc days-in-month feb 2024             29
  datecalc week-number 2024-01-31             5
  datecalc friday13 2024-01-13                2024-09-13
  datecalc in-period 2024-03-02 2024-02-02 2024-03-02
  datecalc schedule 01-01-2024 15-01-2024 -w 1 -o 3

Environment:
  DATECALC_BASIS    utc or local (same as --basis)
  DATECALC_TODAY    pin today's date (YYYY-MM-DD)
  RUST_LOG          tracing filter, overrides -v";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Run a subcommand and return its output lines.
pub fn execute(args: &Args) -> Result<Vec<String>, DateCalcError> {
    let basis = args.basis;
    debug!(command = ?args.command, ?basis, "executing");

    let lines = match &args.command {
        Command::Timestamp { date } => vec![to_timestamp(date)?.to_string()],
        Command::Time { date } => vec![time_of_day(&basis.resolve(parse_instant(date)?))],
        Command::DayName { date } => vec![day_name(date, basis)?.to_string()],
        Command::Format { date } => vec![format_date_time(parse_instant(date)?)],
        Command::LeapYear { year } => vec![is_leap_year(*year).to_string()],
        Command::DaysInMonth { month, year } => vec![days_in_month(*month, *year)?.to_string()],
        Command::DaysBetween { start, end } => {
            vec![days_between_inclusive(start, end)?.to_string()]
        }
        Command::InPeriod { date, start, end } => {
            let period = DatePeriod::new(start.as_str(), end.as_str());
            vec![is_within_period(date, &period)?.to_string()]
        }
        Command::Weekends { month, year } => {
            vec![count_weekend_days(*month, *year)?.to_string()]
        }
        Command::WeekNumber { date } => {
            vec![week_number(resolve_date(date.as_deref(), basis)?).to_string()]
        }
        Command::NextFriday { date } => {
            vec![next_friday(resolve_date(date.as_deref(), basis)?)?.to_string()]
        }
        Command::FridayThe13th { date } => {
            vec![next_friday_the_13th(resolve_date(date.as_deref(), basis)?)?.to_string()]
        }
        Command::Quarter { date } => {
            vec![quarter_of(&resolve_date(date.as_deref(), basis)?).to_string()]
        }
        Command::Schedule {
            start,
            end,
            work_days,
            off_days,
        } => {
            let period = DatePeriod::new(start.as_str(), end.as_str());
            generate_schedule(&period, *work_days, *off_days)?
        }
    };

    Ok(lines)
}

/// Calendar date of an optional date argument, today when absent.
pub fn resolve_date(arg: Option<&str>, basis: TimeBasis) -> Result<NaiveDate, DateCalcError> {
    match arg {
        Some(text) => Ok(basis.resolve(parse_instant(text)?).date()),
        None => get_today_date(basis),
    }
}

/// Get today's date, respecting the DATECALC_TODAY environment variable.
pub fn get_today_date(basis: TimeBasis) -> Result<NaiveDate, DateCalcError> {
    if let Ok(pinned) = std::env::var(TODAY_ENV) {
        return parse_iso_date(&pinned);
    }
    Ok(match basis {
        TimeBasis::Utc => chrono::Utc::now().date_naive(),
        TimeBasis::Local => chrono::Local::now().date_naive(),
    })
}

/// Month argument: a number is passed through for range checking downstream,
/// a name must be a known English month.
fn month_value(s: &str) -> Result<u32, String> {
    if let Ok(n) = s.parse::<u32>() {
        return Ok(n);
    }
    parse_month(s).ok_or_else(|| format!("Invalid month: {}", s))
}
