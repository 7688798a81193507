//! HTTP surface of the Xuetang class-schedule service.

pub mod app;
pub mod config;
pub mod error;
pub mod service_handler;
