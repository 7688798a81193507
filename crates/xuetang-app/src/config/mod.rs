use std::sync::Arc;

use salvo::async_trait;
pub use xuetang_core::config::*;
use xuetang_core::error::CoreError;

use crate::error::AppResult;

/// Shares the loaded settings with handlers, e.g. for `GET /api/app/settings`.
pub struct ConfigHandler {
    pub settings: Settings,
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::new(self.settings.clone()));
    }
}

/// ## Summary
/// Retrieves the settings injected by `ConfigHandler`.
///
/// ## Errors
/// Returns an error if no `ConfigHandler` ran for this request.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Settings not found in depot").into())
}
