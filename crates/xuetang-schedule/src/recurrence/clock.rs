//! Where "now" comes from.
//!
//! Validation is the only step that depends on the current time, so it takes
//! a `Clock` instead of reading the system time itself.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use xuetang_core::config::ScheduleConfig;

use crate::error::ScheduleResult;

/// Source of the current school-local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock and converts it into a fixed zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// ## Summary
    /// Builds a clock in the zone named by the schedule configuration.
    ///
    /// ## Errors
    /// Returns an error if the configured zone name is unknown.
    pub fn from_config(config: &ScheduleConfig) -> ScheduleResult<Self> {
        Ok(Self::new(config.timezone()?))
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
