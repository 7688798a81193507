//! Expansion of a template session into concrete sessions.

mod occurrences;
mod options;

pub use occurrences::{Occurrence, Occurrences, occurrences};
pub use options::ExpansionOptions;

use chrono::NaiveDate;

use crate::error::{RangeLimit, ScheduleError, ScheduleResult};
use crate::recurrence::core::{BaseSession, GeneratedSession, RecurrenceRule};

/// ## Summary
/// Expands a template session into every occurrence of `rule`, in start order.
///
/// The rule is not re-validated; run `validate` first. A rule that cannot
/// produce anything (an end date before the start, a weekly rule without
/// weekdays) yields an empty list. Each session gets the template's duration
/// and a clone of its metadata.
///
/// ## Errors
///
/// Returns `RangeTooLarge` if:
/// - `rule.end_date` is more than `options.max_span_days` after the start date
/// - the rule would produce more than `options.max_occurrences` sessions
///
/// ## Side Effects
///
/// None - this is a pure function that performs expansion in memory.
pub fn expand<M: Clone>(
    base: &BaseSession<M>,
    rule: &RecurrenceRule,
    options: &ExpansionOptions,
) -> ScheduleResult<Vec<GeneratedSession<M>>> {
    let slots = bounded_occurrences(base, rule, options)?;

    tracing::trace!(
        frequency = %rule.frequency,
        count = slots.len(),
        "Expanded recurrence"
    );

    Ok(slots
        .into_iter()
        .map(|slot| GeneratedSession {
            start_time: slot.start,
            end_time: slot.end,
            metadata: base.metadata.clone(),
        })
        .collect())
}

fn bounded_occurrences<M>(
    base: &BaseSession<M>,
    rule: &RecurrenceRule,
    options: &ExpansionOptions,
) -> ScheduleResult<Vec<Occurrence>> {
    check_span(base.start_time.date(), rule.end_date, options)?;

    let slots: Vec<Occurrence> = occurrences(base.start_time, base.end_time, rule)
        .take(options.max_occurrences.saturating_add(1))
        .collect();

    if slots.len() > options.max_occurrences {
        tracing::debug!(
            limit = options.max_occurrences,
            "Recurrence exceeds occurrence limit"
        );
        return Err(ScheduleError::RangeTooLarge(RangeLimit::Occurrences(
            options.max_occurrences,
        )));
    }

    Ok(slots)
}

fn check_span(
    start_date: NaiveDate,
    end_date: NaiveDate,
    options: &ExpansionOptions,
) -> ScheduleResult<()> {
    let span_days = end_date.signed_duration_since(start_date).num_days();
    if span_days > i64::from(options.max_span_days) {
        tracing::debug!(
            span_days,
            limit = options.max_span_days,
            "Recurrence exceeds span limit"
        );
        return Err(ScheduleError::RangeTooLarge(RangeLimit::SpanDays(
            options.max_span_days,
        )));
    }
    Ok(())
}
