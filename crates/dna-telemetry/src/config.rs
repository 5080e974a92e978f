//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for the logging subscriber.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or full directives)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Include source file and line in each event
    pub with_source_location: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "dna-engine".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_source_location: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DNA_SERVICE_NAME`: Service name (default: dna-engine)
    /// - `DNA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `DNA_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `DNA_LOG_SOURCE`: Include file/line (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("DNA_SERVICE_NAME")
                .unwrap_or_else(|_| "dna-engine".to_string()),

            log_level: env::var("DNA_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("DNA_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            with_source_location: env::var("DNA_LOG_SOURCE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Configuration for tests: debug level, plain text.
    pub fn for_testing() -> Self {
        Self {
            service_name: "dna-engine-test".to_string(),
            log_level: "debug".to_string(),
            json_logs: false,
            with_source_location: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
