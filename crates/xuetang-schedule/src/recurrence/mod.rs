//! Recurrence rules and their expansion into class sessions.
//!
//! - `core`: rule, weekday set and session value types
//! - `clock`: source of "now" for validation
//! - `validate`: rule checks run before expansion
//! - `expand`: occurrence generation with range guards
//! - `preview`: occurrence counts for schedule forms
//! - `format`: Chinese weekday labels and rule summaries
//! - `export`: RFC 5545 RRULE rendering for calendar mirrors

pub mod clock;
pub mod core;
pub mod expand;
pub mod export;
pub mod format;
pub mod preview;
pub mod validate;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use core::{BaseSession, Frequency, GeneratedSession, RecurrenceRule, WeekdaySet};
pub use expand::{ExpansionOptions, Occurrence, expand, occurrences};
pub use export::to_rrule;
pub use format::{describe_rule, format_weekdays, format_weekdays_sorted, weekday_label};
pub use preview::preview_count;
pub use validate::{ValidationError, validate, validate_all};
