use chrono::{Local, NaiveDate};
use std::env;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_LEVEL_ENV: &str = "CONVEYOR_LOG_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings controlling structured logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Resolved settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Evaluation date shared by every application in the run.
    pub as_of: NaiveDate,
    pub telemetry: TelemetryConfig,
}

impl RunConfig {
    /// Fills unset options from the environment and the local clock.
    ///
    /// The clock is read here, once, so a whole batch is evaluated against the same day.
    pub fn resolve(as_of: Option<NaiveDate>, log_level: Option<String>) -> Self {
        let log_level = log_level
            .or_else(|| env::var(LOG_LEVEL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
            telemetry: TelemetryConfig { log_level },
        }
    }
}
