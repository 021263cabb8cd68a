//! Work schedule generation from a repeating work/off pattern.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::DateCalcError;
use crate::formatter::format_schedule_date;
use crate::parse::parse_schedule_date;
use crate::types::DatePeriod;

/// Generate the work days of `period` (`DD-MM-YYYY`, both ends inclusive).
///
/// Emits `work_days` consecutive dates starting at `period.start`, skips
/// `off_days` dates, and repeats until the period is used up. The last work
/// block is cut short at `period.end`.
///
/// Returns an empty schedule when the period is empty or `work_days` is
/// negative. `off_days` is not checked; a pattern that stops making progress
/// ends the schedule.
pub fn generate_schedule(
    period: &DatePeriod,
    work_days: i64,
    off_days: i64,
) -> Result<Vec<String>, DateCalcError> {
    let start = parse_schedule_date(&period.start)?;
    let end = parse_schedule_date(&period.end)?;

    let mut remaining = end.signed_duration_since(start).num_days() + 1;
    let mut schedule = Vec::new();

    if remaining <= 0 || work_days < 0 {
        return Ok(schedule);
    }

    let mut cursor = start;
    let mut first = true;

    while remaining > 0 {
        let before = remaining;

        for _ in 0..work_days {
            if first {
                first = false;
            } else {
                cursor = shift(cursor, 1)?;
            }
            schedule.push(format_schedule_date(cursor));
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }

        remaining = remaining.saturating_sub(off_days);

        if remaining >= before {
            debug!(work_days, off_days, remaining, "work/off pattern makes no progress");
            break;
        }
        if remaining > 0 {
            cursor = shift(cursor, off_days)?;
        }
    }

    debug!(
        start = %period.start,
        end = %period.end,
        work_days,
        off_days,
        emitted = schedule.len(),
        "generated schedule"
    );
    Ok(schedule)
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, DateCalcError> {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    shifted.ok_or(DateCalcError::OutOfRange)
}
