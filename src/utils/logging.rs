//! Logging configuration and setup
//!
//! This module provides logging initialization for the SubscriptionBot
//! binary: stdout always, a daily rolling file when a directory is configured.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{BotError, Result};

const LOG_FILE_PREFIX: &str = "subscription_bot.log";

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", config.level)))
}

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held
/// until the process exits.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .try_init()
                .map_err(|e| BotError::Logging(e.to_string()))?;
            Some(guard)
        }
        None => {
            registry
                .try_init()
                .map_err(|e| BotError::Logging(e.to_string()))?;
            None
        }
    };

    info!(level = %config.level, directory = ?config.directory, "Logging initialized");
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str) {
    info!(admin_id = admin_id, action = action, "Admin action performed");
}

/// Log user actions
pub fn log_user_action(user_id: i64, action: &str) {
    info!(user_id = user_id, action = action, "User action performed");
}
