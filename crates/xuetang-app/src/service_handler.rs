use std::sync::Arc;

use salvo::async_trait;
use xuetang_core::error::CoreError;
use xuetang_service::schedule::ScheduleService;

use crate::error::AppResult;

/// Makes the shared schedule service available to every handler.
pub struct ScheduleServiceHandler {
    pub service: Arc<ScheduleService>,
}

#[async_trait]
impl salvo::Handler for ScheduleServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the schedule service from the depot.
///
/// ## Errors
/// Returns an error if the service is not found in the depot.
pub fn get_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ScheduleService>> {
    depot
        .obtain::<Arc<ScheduleService>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Schedule service not found in depot").into())
}
