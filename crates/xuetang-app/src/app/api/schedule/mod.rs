//! Recurring-session endpoints.

use salvo::Router;

use super::SCHEDULE_ROUTE_COMPONENT;

mod dto;
mod preview;
mod sessions;
mod validate;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SCHEDULE_ROUTE_COMPONENT)
        .push(validate::routes())
        .push(preview::routes())
        .push(sessions::routes())
}
