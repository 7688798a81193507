use thiserror::Error;

use crate::recurrence::validate::ValidationError;

/// Which expansion guard a rule tripped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeLimit {
    #[error("more than {0} occurrences")]
    Occurrences(usize),
    #[error("span longer than {0} days")]
    SpanDays(u32),
}

/// Recurrence engine errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Recurrence range too large: {0}")]
    RangeTooLarge(RangeLimit),

    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error("RRULE error: {0}")]
    RRule(#[from] rrule::RRuleError),

    #[error(transparent)]
    CoreError(#[from] xuetang_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
