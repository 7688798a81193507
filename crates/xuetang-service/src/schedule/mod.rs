//! Recurring class sessions.

pub mod model;
pub mod service;
pub mod store;
pub mod sync;


pub use model::{NewSeries, Preview, SeriesOutcome, SessionDetails, StoredSession};
pub use service::ScheduleService;
pub use store::{BoxFuture, InMemorySessionStore, SessionStore};
pub use sync::{CalendarSync, NoopCalendarSync};
