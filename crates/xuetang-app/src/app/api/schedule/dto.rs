use chrono::NaiveDate;
use salvo::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use xuetang_schedule::recurrence::{BaseSession, RecurrenceRule, ValidationError};
use xuetang_service::schedule::SessionDetails;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub start_date: NaiveDate,
    pub rule: RecurrenceRule,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeriesRequest {
    pub session: BaseSession<SessionDetails>,
    pub rule: RecurrenceRule,
}

#[derive(Debug, Serialize)]
pub struct RuleViolation {
    pub code: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl From<ValidationError> for RuleViolation {
    fn from(err: ValidationError) -> Self {
        Self {
            code: err.code(),
            field: err.field(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<RuleViolation>,
}

/// ## Summary
/// Parses a JSON request body.
///
/// ## Errors
/// Returns `BadRequest` if the body is missing or does not match `T`.
pub async fn parse_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))
}
