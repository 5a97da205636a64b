//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{WeatherBuddyError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_weather_config(&settings.weather)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(WeatherBuddyError::Config(
            "Bot token is required (set BOT_TOKEN)".to_string()
        ));
    }

    Ok(())
}

/// Validate weather provider configuration
fn validate_weather_config(config: &super::WeatherConfig) -> Result<()> {
    if config.api_key.trim().is_empty() {
        return Err(WeatherBuddyError::Config(
            "Weather API key is required (set WEATHER_KEY)".to_string()
        ));
    }

    for (name, value) in [("geo_base_url", &config.geo_base_url), ("api_base_url", &config.api_base_url)] {
        let url = url::Url::parse(value)
            .map_err(|e| WeatherBuddyError::Config(format!("Invalid weather {}: {}", name, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(WeatherBuddyError::Config(
                format!("Weather {} must use http or https, got {}", name, url.scheme())
            ));
        }
    }

    if config.timeout_seconds == Some(0) {
        return Err(WeatherBuddyError::Config(
            "Weather timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.backend == StorageBackend::Memory {
        return Ok(());
    }

    if config.url.is_empty() {
        return Err(WeatherBuddyError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(WeatherBuddyError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(WeatherBuddyError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(WeatherBuddyError::Config(
            "Database acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(WeatherBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(WeatherBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_prefix.is_empty() {
        return Err(WeatherBuddyError::Config(
            "Log file prefix is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}
