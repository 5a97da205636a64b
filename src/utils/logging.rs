//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Weather Buddy application.

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, Result, WeatherBuddyError};

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured the returned guard must be kept alive, otherwise
/// buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| WeatherBuddyError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a handler failure at the level matching its severity
pub fn log_handler_error(user_id: i64, command: &str, err: &WeatherBuddyError) {
    match err.severity() {
        ErrorSeverity::Info => info!(user_id = user_id, command = command, error = %err, "Command could not be completed"),
        ErrorSeverity::Warning => warn!(user_id = user_id, command = command, error = %err, "Command could not be completed"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(user_id = user_id, command = command, error = %err, "Command failed")
        }
    }
}
