//! # Permissioned-Chain Telemetry
//!
//! Structured logging for the node binaries, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! pc_telemetry::log_event!(info, "node-runtime", "Started");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PC_SERVICE_NAME` | `permissioned-chain` | Service name in startup logs |
//! | `PC_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives |
//! | `PC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `PC_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_subscriber, env_filter, fmt_layer};

#[doc(hidden)]
pub use tracing;

use thiserror::Error;
use tracing_subscriber::util::SubscriberInitExt;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {directives:?}: {reason}")]
    InvalidFilter { directives: String, reason: String },

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber writing to stdout.
///
/// Returns a guard to hold for the lifetime of the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    build_subscriber(config, std::io::stdout)?
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}

/// Keeps telemetry active; logs shutdown when dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
