//! Recurring class-session expansion.
//!
//! Turns one template session plus a recurrence rule into the concrete,
//! ordered list of sessions a class will meet on, and provides the
//! validation, preview and display helpers the portal builds its schedule
//! forms on.

pub mod error;
pub mod recurrence;
