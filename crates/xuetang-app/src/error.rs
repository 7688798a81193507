use salvo::prelude::{Depot, Json, Request, Response, StatusCode, Writer, async_trait};
use serde::Serialize;
use thiserror::Error;
use xuetang_schedule::error::ScheduleError;
use xuetang_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] xuetang_core::error::CoreError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        Self::ServiceError(err.into())
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
///
/// `code` is stable for clients to key messages on; `field` names the
/// request field a form should highlight, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceError(ServiceError::ScheduleError(err)) => match err {
                ScheduleError::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::ServiceError(ServiceError::InvalidSession(_) | ServiceError::EmptySeries(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::ServiceError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        let (code, field) = match self {
            Self::BadRequest(_) => ("invalid_body", None),
            Self::ServiceError(ServiceError::ScheduleError(err)) => schedule_code(err),
            Self::ServiceError(ServiceError::InvalidSession(_)) => {
                ("invalid_session", Some("endTime"))
            }
            Self::ServiceError(ServiceError::EmptySeries(_)) => ("empty_series", Some("endDate")),
            Self::ServiceError(ServiceError::StoreError(_)) => ("store_unavailable", None),
            Self::ServiceError(
                ServiceError::CoreError(_) | ServiceError::CalendarSyncError(_),
            )
            | Self::CoreError(_) => ("internal", None),
        };

        // Internal details stay in the logs.
        let error = if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        ErrorResponse { error, code, field }
    }
}

fn schedule_code(err: &ScheduleError) -> (&'static str, Option<&'static str>) {
    match err {
        ScheduleError::Validation(v) => (v.code(), Some(v.field())),
        ScheduleError::RangeTooLarge(_) => ("range_too_large", Some("endDate")),
        ScheduleError::InvalidDateTime(_) | ScheduleError::RRule(_) => ("invalid_rule", None),
        ScheduleError::CoreError(_) => ("internal", None),
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(self.to_response()));
    }
}
