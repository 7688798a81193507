use salvo::prelude::Json;
use salvo::{Depot, Request, Router, handler};
use xuetang_service::schedule::Preview;

use super::dto::{PreviewRequest, parse_body};
use crate::error::AppResult;
use crate::service_handler::get_service_from_depot;

#[handler]
async fn preview(req: &mut Request, depot: &Depot) -> AppResult<Json<Preview>> {
    let service = get_service_from_depot(depot)?;
    let body: PreviewRequest = parse_body(req).await?;

    Ok(Json(service.preview(body.start_date, &body.rule)?))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("preview").post(preview)
}
