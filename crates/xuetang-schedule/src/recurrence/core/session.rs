use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// ## Summary
/// The template occurrence a rule is expanded from.
///
/// Times are school-local wall-clock times. `metadata` is carried into every
/// generated session untouched; the expander never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSession<M> {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(flatten)]
    pub metadata: M,
}

impl<M> BaseSession<M> {
    #[must_use]
    pub const fn new(start_time: NaiveDateTime, end_time: NaiveDateTime, metadata: M) -> Self {
        Self {
            start_time,
            end_time,
            metadata,
        }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// One concrete occurrence produced by expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSession<M> {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(flatten)]
    pub metadata: M,
}

impl<M> GeneratedSession<M> {
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}
