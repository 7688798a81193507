use chrono::NaiveDate;
use thiserror::Error;
use xuetang_schedule::error::ScheduleError;
use xuetang_schedule::recurrence::ValidationError;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),

    #[error(transparent)]
    CoreError(#[from] xuetang_core::error::CoreError),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("No session starts on or before {0}")]
    EmptySeries(NaiveDate),

    #[error("Session store error: {0}")]
    StoreError(String),

    #[error("Calendar sync error: {0}")]
    CalendarSyncError(String),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::ScheduleError(err.into())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
