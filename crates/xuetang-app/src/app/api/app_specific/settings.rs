use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use serde::Serialize;

use crate::config::get_config_from_depot;
use crate::error::AppResult;

/// Expansion limits clients need to build a schedule form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleSettings {
    timezone: String,
    max_occurrences: usize,
    max_span_days: u32,
}

#[handler]
async fn schedule_settings(depot: &Depot) -> AppResult<Json<ScheduleSettings>> {
    let settings = get_config_from_depot(depot)?;
    Ok(Json(ScheduleSettings {
        timezone: settings.schedule.timezone.clone(),
        max_occurrences: settings.schedule.max_occurrences,
        max_span_days: settings.schedule.max_span_days,
    }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("settings").get(schedule_settings)
}
