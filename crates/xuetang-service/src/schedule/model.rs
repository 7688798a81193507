use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use xuetang_schedule::recurrence::GeneratedSession;

/// ## Summary
/// What a class session is about. Copied unchanged into every occurrence
/// of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetails {
    pub title: String,
    pub class_id: Uuid,
    #[serde(default)]
    pub teacher_id: Option<Uuid>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A session once the store has given it an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id: Uuid,
    pub series_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(flatten)]
    pub details: SessionDetails,
}

/// An expanded series handed to the store in one batch.
#[derive(Debug, Clone)]
pub struct NewSeries {
    pub series_id: Uuid,
    /// RFC 5545 text of the rule the sessions were expanded from.
    pub rrule: String,
    pub sessions: Vec<GeneratedSession<SessionDetails>>,
}

/// Result of creating a recurring series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOutcome {
    pub series_id: Uuid,
    pub rrule: String,
    pub sessions: Vec<StoredSession>,
    /// Sessions the calendar mirror failed to accept.
    pub sync_failures: usize,
}

/// What a rule would produce, for display before committing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub count: usize,
    pub description: String,
    pub weekdays_label: String,
}
