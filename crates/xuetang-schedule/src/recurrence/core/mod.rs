//! Value types for recurrence rules and the sessions they generate.

mod rule;
mod session;
mod weekday;

pub use rule::{Frequency, RecurrenceRule};
pub use session::{BaseSession, GeneratedSession};
pub use weekday::{InvalidWeekday, WeekdaySet, weekday_from_number, weekday_number};
