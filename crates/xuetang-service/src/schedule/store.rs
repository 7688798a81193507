use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{NewSeries, StoredSession};
use crate::error::ServiceResult;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// ## Summary
/// Persistence for class sessions.
///
/// Implementations assign identities; the schedule service never invents
/// session ids itself.
pub trait SessionStore: Send + Sync {
    /// Stores every session of a new series, returning them in the order given.
    fn insert_series<'a>(&'a self, series: NewSeries) -> BoxFuture<'a, ServiceResult<Vec<StoredSession>>>;

    /// Sessions of one class, earliest first.
    fn sessions_for_class<'a>(&'a self, class_id: Uuid) -> BoxFuture<'a, ServiceResult<Vec<StoredSession>>>;
}

/// Process-local session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<Vec<StoredSession>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    #[tracing::instrument(skip(self, series), fields(series_id = %series.series_id, count = series.sessions.len()))]
    fn insert_series<'a>(&'a self, series: NewSeries) -> BoxFuture<'a, ServiceResult<Vec<StoredSession>>> {
        Box::pin(async move {
            tracing::trace!(rrule = %series.rrule, "Storing series");

            let stored: Vec<StoredSession> = series
                .sessions
                .into_iter()
                .map(|session| StoredSession {
                    id: Uuid::now_v7(),
                    series_id: series.series_id,
                    start_time: session.start_time,
                    end_time: session.end_time,
                    details: session.metadata,
                })
                .collect();

            self.sessions.write().await.extend(stored.iter().cloned());
            Ok(stored)
        })
    }

    #[tracing::instrument(skip(self))]
    fn sessions_for_class<'a>(&'a self, class_id: Uuid) -> BoxFuture<'a, ServiceResult<Vec<StoredSession>>> {
        Box::pin(async move {
            let mut sessions: Vec<StoredSession> = self
                .sessions
                .read()
                .await
                .iter()
                .filter(|session| session.details.class_id == class_id)
                .cloned()
                .collect();
            sessions.sort_by_key(|session| session.start_time);
            Ok(sessions)
        })
    }
}
