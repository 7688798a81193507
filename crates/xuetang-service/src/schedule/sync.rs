use super::model::StoredSession;
use super::store::BoxFuture;
use crate::error::ServiceResult;

/// Mirrors stored sessions into an external calendar.
pub trait CalendarSync: Send + Sync {
    fn mirror<'a>(&'a self, session: &'a StoredSession) -> BoxFuture<'a, ServiceResult<()>>;
}

/// Used when no external calendar is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCalendarSync;

impl CalendarSync for NoopCalendarSync {
    fn mirror<'a>(&'a self, session: &'a StoredSession) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            tracing::trace!(session_id = %session.id, "Calendar sync disabled, skipping");
            Ok(())
        })
    }
}
