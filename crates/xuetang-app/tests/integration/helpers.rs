use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use salvo::{Router, Service};
use xuetang_app::app::api::routes;
use xuetang_app::config::{
    ConfigHandler, LoggingConfig, ScheduleConfig, ServerConfig, Settings,
};
use xuetang_app::service_handler::ScheduleServiceHandler;
use xuetang_schedule::recurrence::{ExpansionOptions, FixedClock};
use xuetang_service::schedule::{InMemorySessionStore, NoopCalendarSync, ScheduleService};

pub const BASE_URL: &str = "http://127.0.0.1:5800";

/// "Now" for every test: 2024-01-01 08:00, a Monday.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid timestamp")
}

pub fn test_settings(max_occurrences: usize) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        schedule: ScheduleConfig {
            timezone: "UTC".to_string(),
            max_occurrences,
            ..ScheduleConfig::default()
        },
    }
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Full router wired the way `main` wires it, on a fixed clock.
pub fn test_service(max_occurrences: usize) -> Service {
    let settings = test_settings(max_occurrences);
    let schedule = ScheduleService::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(NoopCalendarSync),
        Arc::new(FixedClock(now())),
        ExpansionOptions::from(&settings.schedule),
        chrono_tz::UTC,
    );

    let router = Router::new()
        .hoop(ConfigHandler { settings })
        .hoop(ScheduleServiceHandler {
            service: Arc::new(schedule),
        })
        .push(routes());

    Service::new(router)
}
