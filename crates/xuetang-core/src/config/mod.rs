use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default IANA zone the school's wall-clock times are expressed in.
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";
pub const DEFAULT_MAX_OCCURRENCES: usize = 1000;
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 3660;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Limits and locale for recurring-session expansion.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA zone name; session times are wall-clock times in this zone.
    pub timezone: String,
    pub max_occurrences: usize,
    pub max_span_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
        }
    }
}

impl ScheduleConfig {
    /// ## Summary
    /// Resolves the configured zone name.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` if the name is not a known IANA zone.
    pub fn timezone(&self) -> CoreResult<chrono_tz::Tz> {
        self.timezone.parse::<chrono_tz::Tz>().map_err(|err| {
            CoreError::InvalidConfiguration(format!(
                "unknown timezone '{}': {err}",
                self.timezone
            ))
        })
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// Environment keys use the `XUETANG_` prefix and `__` between sections,
    /// e.g. `XUETANG_SCHEDULE__MAX_OCCURRENCES=500`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8700)?
            .set_default("logging.level", "debug")?
            .set_default("schedule.timezone", DEFAULT_TIMEZONE)?
            .set_default("schedule.max_occurrences", DEFAULT_MAX_OCCURRENCES as u64)?
            .set_default("schedule.max_span_days", u64::from(DEFAULT_MAX_SPAN_DAYS))?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("XUETANG")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        // Fail at startup rather than on the first request.
        settings.schedule.timezone()?;

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "No .env file loaded");
    }

    Settings::load()
}
