use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Router, handler};
use uuid::Uuid;
use xuetang_service::schedule::{SeriesOutcome, StoredSession};

use super::dto::{CreateSeriesRequest, parse_body};
use crate::error::{AppError, AppResult};
use crate::service_handler::get_service_from_depot;

/// ## Summary
/// Expands a template session and stores every occurrence.
///
/// ## Side Effects
/// - Writes the series to the session store
/// - Mirrors each session to the external calendar
#[handler]
async fn create_series(
    req: &mut Request,
    depot: &Depot,
    res: &mut Response,
) -> AppResult<Json<SeriesOutcome>> {
    let service = get_service_from_depot(depot)?;
    let body: CreateSeriesRequest = parse_body(req).await?;

    let outcome = service.create_series(body.session, &body.rule).await?;

    res.status_code(StatusCode::CREATED);
    Ok(Json(outcome))
}

#[handler]
async fn list_sessions(req: &mut Request, depot: &Depot) -> AppResult<Json<Vec<StoredSession>>> {
    let service = get_service_from_depot(depot)?;
    let class_id = req
        .param::<Uuid>("class_id")
        .ok_or_else(|| AppError::BadRequest("class id must be a UUID".to_string()))?;

    Ok(Json(service.list_sessions(class_id).await?))
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path("sessions").post(create_series))
        .push(Router::with_path("classes/{class_id}/sessions").get(list_sessions))
}
