//! # DNA Telemetry
//!
//! Structured logging for the DNA engine and its callers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dna_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Engine events are now written to stdout
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DNA_SERVICE_NAME` | `dna-engine` | Service name attached to log lines |
//! | `DNA_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `DNA_JSON_LOGS` | `false` | Emit JSON lines instead of text |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingStatus};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter {directive:?}: {reason}")]
    InvalidFilter {
        /// Directive as configured
        directive: String,
        /// Parser message
        reason: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
