//! Structured logging bootstrap.
//!
//! Events carry consistent fields so log pipelines can group them:
//! - `service`: configured service name (on the startup event)
//! - `population`: DNA population the event belongs to
//! - `dna`: hex digest involved, when there is one

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Outcome of [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingStatus {
    /// This call installed the global subscriber.
    Installed,
    /// A global subscriber was already set; this call changed nothing.
    AlreadyInstalled,
}

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once: later calls return
/// [`LoggingStatus::AlreadyInstalled`] instead of failing, so test binaries
/// can initialize from every test.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingStatus, TelemetryError> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
            directive: config.log_level.clone(),
            reason: e.to_string(),
        })?;

    let installed = if config.json_logs {
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .is_ok()
    } else {
        let text_layer = fmt::layer()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(text_layer)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(
            service = %config.service_name,
            json_logs = config.json_logs,
            level = %config.log_level,
            "Logging initialized"
        );
        Ok(LoggingStatus::Installed)
    } else {
        Ok(LoggingStatus::AlreadyInstalled)
    }
}

/// Log a DNA-engine event with the population field attached.
///
/// ```rust,ignore
/// log_dna_event!(info, "genesis-cats", "DNA registered", dna = %dna);
/// ```
#[macro_export]
macro_rules! log_dna_event {
    ($level:ident, $population:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            population = %$population,
            $($($field)*,)?
            $msg
        )
    };
}
