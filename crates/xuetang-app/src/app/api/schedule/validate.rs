use salvo::prelude::Json;
use salvo::{Depot, Request, Router, handler};
use xuetang_schedule::recurrence::RecurrenceRule;

use super::dto::{RuleViolation, ValidateResponse, parse_body};
use crate::error::AppResult;
use crate::service_handler::get_service_from_depot;

/// ## Summary
/// Reports every problem with a recurrence rule.
///
/// An invalid rule is a successful answer here, so violations come back
/// with 200 and `valid: false`.
#[handler]
async fn validate_rule(req: &mut Request, depot: &Depot) -> AppResult<Json<ValidateResponse>> {
    let service = get_service_from_depot(depot)?;
    let rule: RecurrenceRule = parse_body(req).await?;

    let errors: Vec<RuleViolation> = service
        .validate_all(&rule)
        .into_iter()
        .map(RuleViolation::from)
        .collect();

    Ok(Json(ValidateResponse {
        valid: errors.is_empty(),
        errors,
    }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("validate").post(validate_rule)
}
