use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;
use uuid::Uuid;
use xuetang_core::config::ScheduleConfig;
use xuetang_schedule::recurrence::{
    BaseSession, Clock, ExpansionOptions, RecurrenceRule, SystemClock, ValidationError,
    describe_rule, expand, format_weekdays, preview_count, to_rrule, validate, validate_all,
};

use super::model::{NewSeries, Preview, SeriesOutcome, SessionDetails, StoredSession};
use super::store::SessionStore;
use super::sync::CalendarSync;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Creates recurring class sessions.
///
/// Validation reads the injected clock; expansion limits and the zone used
/// for RRULE export come from the schedule configuration.
#[derive(Clone)]
pub struct ScheduleService {
    store: Arc<dyn SessionStore>,
    calendar: Arc<dyn CalendarSync>,
    clock: Arc<dyn Clock>,
    options: ExpansionOptions,
    timezone: Tz,
}

impl std::fmt::Debug for ScheduleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleService")
            .field("options", &self.options)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl ScheduleService {
    #[must_use]
    pub fn new(
        store: Arc<dyn SessionStore>,
        calendar: Arc<dyn CalendarSync>,
        clock: Arc<dyn Clock>,
        options: ExpansionOptions,
        timezone: Tz,
    ) -> Self {
        Self {
            store,
            calendar,
            clock,
            options,
            timezone,
        }
    }

    /// ## Summary
    /// Builds a service on the system clock in the configured zone.
    ///
    /// ## Errors
    /// Returns an error if the configured zone name is unknown.
    pub fn from_config(
        config: &ScheduleConfig,
        store: Arc<dyn SessionStore>,
        calendar: Arc<dyn CalendarSync>,
    ) -> ServiceResult<Self> {
        let timezone = config.timezone()?;
        Ok(Self::new(
            store,
            calendar,
            Arc::new(SystemClock::new(timezone)),
            ExpansionOptions::from(config),
            timezone,
        ))
    }

    #[must_use]
    pub const fn options(&self) -> &ExpansionOptions {
        &self.options
    }

    /// ## Summary
    /// Checks a rule against the service clock.
    ///
    /// ## Errors
    /// Returns the first `ValidationError` the rule violates.
    pub fn validate(&self, rule: &RecurrenceRule) -> Result<(), ValidationError> {
        validate(rule, &*self.clock)
    }

    /// Every violation of a rule, in check order.
    #[must_use]
    pub fn validate_all(&self, rule: &RecurrenceRule) -> Vec<ValidationError> {
        validate_all(rule, &*self.clock)
    }

    /// ## Summary
    /// Counts and describes what a rule would create from `start_date`.
    ///
    /// ## Errors
    /// Returns an error if the rule is invalid or exceeds the expansion limits.
    #[tracing::instrument(skip(self, rule), fields(frequency = %rule.frequency))]
    pub fn preview(&self, start_date: NaiveDate, rule: &RecurrenceRule) -> ServiceResult<Preview> {
        self.validate(rule)?;

        let count = preview_count(start_date, rule, &self.options)?;
        tracing::debug!(count, "Previewed recurrence");

        Ok(Preview {
            count,
            description: describe_rule(rule),
            weekdays_label: format_weekdays(&rule.weekdays),
        })
    }

    /// ## Summary
    /// Validates, expands and stores a recurring series, then mirrors each
    /// stored session to the external calendar.
    ///
    /// ## Errors
    /// Returns an error if the template session is empty or inverted, the
    /// rule is invalid or too large, no occurrence falls on or before the end
    /// date, or the store rejects the batch. Calendar
    /// failures are logged and counted in `sync_failures` instead.
    ///
    /// ## Side Effects
    /// - Inserts one session per occurrence into the session store
    /// - Pushes each stored session to the calendar mirror
    #[tracing::instrument(
        skip(self, base, rule),
        fields(class_id = %base.metadata.class_id, frequency = %rule.frequency)
    )]
    pub async fn create_series(
        &self,
        base: BaseSession<SessionDetails>,
        rule: &RecurrenceRule,
    ) -> ServiceResult<SeriesOutcome> {
        if base.end_time <= base.start_time {
            return Err(ServiceError::InvalidSession(
                "end time must be after start time".to_string(),
            ));
        }

        self.validate(rule)?;

        let sessions = expand(&base, rule, &self.options)?;
        if sessions.is_empty() {
            return Err(ServiceError::EmptySeries(rule.end_date));
        }

        let rrule = to_rrule(base.start_time, rule, self.timezone)?;
        let series_id = Uuid::now_v7();

        tracing::debug!(%series_id, count = sessions.len(), "Expanded series");

        let stored = self
            .store
            .insert_series(NewSeries {
                series_id,
                rrule: rrule.clone(),
                sessions,
            })
            .await?;

        let sync_failures = self.mirror_all(&stored).await;

        tracing::info!(
            %series_id,
            count = stored.len(),
            sync_failures,
            "Created recurring series"
        );

        Ok(SeriesOutcome {
            series_id,
            rrule,
            sessions: stored,
            sync_failures,
        })
    }

    /// ## Summary
    /// Stored sessions of a class, earliest first.
    ///
    /// ## Errors
    /// Returns an error if the store query fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_sessions(&self, class_id: Uuid) -> ServiceResult<Vec<StoredSession>> {
        self.store.sessions_for_class(class_id).await
    }

    async fn mirror_all(&self, sessions: &[StoredSession]) -> usize {
        let mut failures = 0;
        for session in sessions {
            if let Err(err) = self.calendar.mirror(session).await {
                tracing::warn!(session_id = %session.id, error = %err, "Failed to mirror session to calendar");
                failures += 1;
            }
        }
        failures
    }
}
