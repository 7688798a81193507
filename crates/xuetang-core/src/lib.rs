//! Shared configuration, errors, and route constants for the Xuetang portal
//! scheduling workspace.

pub mod config;
pub mod constants;
pub mod error;
