//! Occurrence counts shown before a schedule is committed.

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use super::core::{BaseSession, RecurrenceRule};
use super::expand::{ExpansionOptions, expand};
use crate::error::ScheduleResult;

/// Length of the stand-in session used for previews.
pub const PREVIEW_SESSION_HOURS: i64 = 2;

/// ## Summary
/// Counts the sessions `rule` would create starting on `start_date`.
///
/// Uses a stand-in two-hour session at midnight of `start_date`, so the
/// count does not depend on the real session's times.
///
/// ## Errors
/// Returns `RangeTooLarge` under the same limits as `expand`.
pub fn preview_count(
    start_date: NaiveDate,
    rule: &RecurrenceRule,
    options: &ExpansionOptions,
) -> ScheduleResult<usize> {
    let start = start_date.and_time(NaiveTime::MIN);
    let base = BaseSession::new(start, start + TimeDelta::hours(PREVIEW_SESSION_HOURS), ());

    Ok(expand(&base, rule, options)?.len())
}
