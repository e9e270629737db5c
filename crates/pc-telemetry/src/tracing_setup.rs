//! Subscriber construction.
//!
//! A registry with an `EnvFilter` and, when console output is enabled, one
//! `fmt` layer: pretty for development, JSON lines for containers.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Parse the configured filter directives.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
        directives: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// The output layer, or `None` when console output is off.
pub fn fmt_layer<S, W>(config: &TelemetryConfig, writer: W) -> Option<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if !config.console_output {
        return None;
    }

    let layer = if config.json_logs {
        // JSON output for containers/production
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .boxed()
    } else {
        // Pretty output for development
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
            .with_writer(writer)
            .boxed()
    };
    Some(layer)
}

/// Build a subscriber writing to `writer`, without installing it.
pub fn build_subscriber<W>(
    config: &TelemetryConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter(config)?;
    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config, writer)))
}
