//! Class-schedule service: validates and expands recurring sessions, then
//! hands them to the portal's session store and calendar mirror.

pub mod error;
pub mod schedule;
