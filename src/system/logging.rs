//! Diagnostics logging initialization
//!
//! Diagnostics (platform setup, config problems) go through `tracing` and are
//! written to stderr, keeping stdout for program output. This is separate
//! from the library log slot in [`crate::logger`], which the application
//! routes wherever it likes.

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{GreeterError, Result};
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Build a subscriber for `config` that writes to `writer`.
///
/// The result is not installed; pass it to
/// `tracing::dispatcher::set_global_default` or scope it with
/// `tracing::dispatcher::with_default`.
pub fn build_dispatch<W>(config: &LoggingConfig, writer: W) -> Result<Dispatch>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.level).map_err(|e| {
        GreeterError::config(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false);

    Ok(match config.format {
        LogFormat::Json => Dispatch::new(subscriber_builder.json().finish()),
        LogFormat::Text => Dispatch::new(subscriber_builder.finish()),
    })
}

/// Initialize the tracing subscriber from configuration
///
/// **Note**: only the first successful call installs a subscriber; later
/// calls still validate the filter but leave the existing subscriber alone.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_tracing(config: &LoggingConfig) -> Result<WorkerGuard> {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let dispatch = build_dispatch(config, non_blocking_writer)?;

    if tracing::dispatcher::set_global_default(dispatch).is_err() {
        tracing::debug!("Tracing subscriber already installed, keeping it");
    }

    Ok(guard)
}
