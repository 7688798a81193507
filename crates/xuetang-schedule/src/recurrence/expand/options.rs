use xuetang_core::config::{DEFAULT_MAX_OCCURRENCES, DEFAULT_MAX_SPAN_DAYS, ScheduleConfig};

/// Guards that keep a single expansion bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences to generate.
    pub max_occurrences: usize,

    /// Maximum number of days between the first start date and the end date.
    pub max_span_days: u32,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
        }
    }
}

impl ExpansionOptions {
    /// Sets the maximum number of occurrences.
    #[must_use]
    pub const fn with_max_occurrences(mut self, max: usize) -> Self {
        self.max_occurrences = max;
        self
    }

    /// Sets the maximum date span in days.
    #[must_use]
    pub const fn with_max_span_days(mut self, days: u32) -> Self {
        self.max_span_days = days;
        self
    }
}

impl From<&ScheduleConfig> for ExpansionOptions {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            max_occurrences: config.max_occurrences,
            max_span_days: config.max_span_days,
        }
    }
}
