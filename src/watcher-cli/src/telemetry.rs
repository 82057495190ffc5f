//! Tracing setup with optional file-based logging
//!
//! - Human-readable console output on stderr (stdout carries responses)
//! - JSON formatted logs to a rolling file when `log_dir` is configured
//! - Size-based rotation (10MB per file) plus daily rotation

use anyhow::Result;
use rolling_file::{RollingConditionBasic, RollingFileAppender};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use watcher_core::LoggingConfig;

/// Initialize tracing
///
/// Returns a guard when file logging is enabled; keep it alive so logs are flushed
pub fn init_telemetry(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            std::fs::create_dir_all(log_dir)?;

            // Format: watcher.log.YYYY-MM-DD, rotated at 10MB or daily
            let file_appender = RollingFileAppender::new(
                log_dir.join("watcher.log"),
                RollingConditionBasic::new()
                    .daily()
                    .max_size(10 * 1024 * 1024),
                9,
            )?;
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true)
                .with_thread_ids(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    if let Some(dir) = &config.log_dir {
        tracing::debug!("File logging enabled in {}", dir);
    }

    Ok(guard)
}
