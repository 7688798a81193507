use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WeekdaySet;

/// How a rule steps from one occurrence to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    /// On each listed weekday.
    Weekly,
    /// Every `interval` days.
    Daily,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_interval() -> u32 {
    1
}

/// ## Summary
/// A compact description of a family of sessions.
///
/// `interval` only applies to `Daily`; weekly cadence comes entirely from
/// `weekdays`. `end_date` is the last date an occurrence may start on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub weekdays: WeekdaySet,
    pub end_date: NaiveDate,
}

impl RecurrenceRule {
    #[must_use]
    pub fn weekly(weekdays: WeekdaySet, end_date: NaiveDate) -> Self {
        Self {
            frequency: Frequency::Weekly,
            interval: default_interval(),
            weekdays,
            end_date,
        }
    }

    #[must_use]
    pub fn daily(interval: u32, end_date: NaiveDate) -> Self {
        Self {
            frequency: Frequency::Daily,
            interval,
            weekdays: WeekdaySet::default(),
            end_date,
        }
    }
}
