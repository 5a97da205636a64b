//! Error handling for Weather Buddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Weather Buddy application
#[derive(Error, Debug)]
pub enum WeatherBuddyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Weather provider error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User already exists: {user_id}")]
    UserAlreadyExists { user_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Weather provider specific errors
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid weather provider response: {0}")]
    Decode(String),

    #[error("no coordinates found for {0:?}")]
    NotFound(String),
}

/// Result type alias for Weather Buddy operations
pub type Result<T> = std::result::Result<T, WeatherBuddyError>;

/// Result type alias for weather provider calls
pub type WeatherResult<T> = std::result::Result<T, WeatherError>;

impl WeatherError {
    /// True when the provider answered but knows no such place
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound(_))
    }
}

impl WeatherBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            WeatherBuddyError::Database(_) => true,
            WeatherBuddyError::Migration(_) => false,
            WeatherBuddyError::Telegram(_) => true,
            WeatherBuddyError::Weather(_) => true,
            WeatherBuddyError::Config(_) => false,
            WeatherBuddyError::ConfigLoad(_) => false,
            WeatherBuddyError::UrlParse(_) => false,
            WeatherBuddyError::Io(_) => true,
            WeatherBuddyError::UserAlreadyExists { .. } => true,
            WeatherBuddyError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WeatherBuddyError::Migration(_) => ErrorSeverity::Critical,
            WeatherBuddyError::Config(_) => ErrorSeverity::Critical,
            WeatherBuddyError::ConfigLoad(_) => ErrorSeverity::Critical,
            WeatherBuddyError::UrlParse(_) => ErrorSeverity::Critical,
            WeatherBuddyError::Weather(WeatherError::NotFound(_)) => ErrorSeverity::Info,
            WeatherBuddyError::UserAlreadyExists { .. } => ErrorSeverity::Warning,
            WeatherBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
