//! Rule checks that must pass before a rule is expanded.

use thiserror::Error;

use super::clock::Clock;
use super::core::{Frequency, RecurrenceRule};

/// A rule the schedule form should not submit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Interval must be at least 1")]
    InvalidInterval,

    #[error("Weekly recurrence needs at least one weekday")]
    MissingWeekdays,

    #[error("End date must be in the future")]
    EndDateNotFuture,
}

impl ValidationError {
    /// Stable identifier for clients to key messages on.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidInterval => "invalid_interval",
            Self::MissingWeekdays => "missing_weekdays",
            Self::EndDateNotFuture => "end_date_not_future",
        }
    }

    /// The rule field the error belongs to, as named on the wire.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::InvalidInterval => "interval",
            Self::MissingWeekdays => "weekdays",
            Self::EndDateNotFuture => "endDate",
        }
    }
}

/// ## Summary
/// Checks a rule, reporting the first problem found.
///
/// Checks run in order: interval, weekdays, end date. The end date counts
/// from its midnight, so it must be a later calendar day than `clock.today()`.
///
/// ## Errors
/// Returns the first `ValidationError` the rule violates.
pub fn validate<C: Clock + ?Sized>(
    rule: &RecurrenceRule,
    clock: &C,
) -> Result<(), ValidationError> {
    match validate_all(rule, clock).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// ## Summary
/// Checks a rule, reporting every problem found, in check order.
#[must_use]
pub fn validate_all<C: Clock + ?Sized>(rule: &RecurrenceRule, clock: &C) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if rule.interval < 1 {
        errors.push(ValidationError::InvalidInterval);
    }

    if rule.frequency == Frequency::Weekly && rule.weekdays.is_empty() {
        errors.push(ValidationError::MissingWeekdays);
    }

    if rule.end_date <= clock.today() {
        errors.push(ValidationError::EndDateNotFuture);
    }

    tracing::trace!(
        frequency = %rule.frequency,
        error_count = errors.len(),
        "Validated recurrence rule"
    );

    errors
}
