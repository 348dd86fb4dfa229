//! Tracing set-up. The terminal belongs to the UI, so events only go to a
//! daily rolling file.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Config;

const LOG_FILE_PREFIX: &str = "book-store.log";

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init_logging(config: &Config) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir).context("failed to create log directory")?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(filter),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
