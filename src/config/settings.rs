//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::utils::errors::WeatherBuddyError;

/// Prefix for structured environment overrides, e.g. `WEATHERBUDDY__BOT__TOKEN`
pub const ENV_PREFIX: &str = "WEATHERBUDDY";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub weather: WeatherConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Log every inbound update at info level, visible under the default filter
    pub debug: bool,
}

/// OpenWeather API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub api_key: String,
    pub geo_base_url: String,
    pub api_base_url: String,
    pub timeout_seconds: Option<u64>,
}

/// Storage backend for user records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long a query waits for a free pooled connection
    pub acquire_timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Settings {
    /// Load settings from defaults, `config.toml`, and environment variables
    ///
    /// Load `.env` with [`EnvFile::load`] first if it should take part.
    pub fn new() -> Result<Self, WeatherBuddyError> {
        Ok(Self::load_from(|key| std::env::var(key).ok())?)
    }

    /// Build settings with an explicit lookup for the plain deployment variables
    pub fn load_from<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.debug", defaults.bot.debug)?
            .set_default("weather.api_key", defaults.weather.api_key)?
            .set_default("weather.geo_base_url", defaults.weather.geo_base_url)?
            .set_default("weather.api_base_url", defaults.weather.api_base_url)?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", defaults.database.max_connections)?
            .set_default("database.min_connections", defaults.database.min_connections)?
            .set_default("database.acquire_timeout_seconds", defaults.database.acquire_timeout_seconds)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_prefix", defaults.logging.file_prefix)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("bot.token", lookup("BOT_TOKEN"))?
            .set_override_option("weather.api_key", lookup("WEATHER_KEY"))?
            .set_override_option("database.url", postgres_url_from(&lookup))?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), WeatherBuddyError> {
        super::validation::validate_settings(self)
    }
}

/// Outcome of loading the `.env` file
///
/// Loading happens before logging exists, so the outcome is kept and
/// reported later through [`EnvFile::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    Loaded(PathBuf),
    Missing(String),
}

impl EnvFile {
    /// Load `.env` from the working directory or a parent into the process environment
    pub fn load() -> Self {
        match dotenv::dotenv() {
            Ok(path) => EnvFile::Loaded(path),
            Err(e) => EnvFile::Missing(e.to_string()),
        }
    }

    pub fn log(&self) {
        match self {
            EnvFile::Loaded(path) => info!(path = %path.display(), "Loaded .env file"),
            EnvFile::Missing(reason) => {
                warn!(reason = %reason, "No .env file loaded, using process environment")
            }
        }
    }
}

/// Compose a connection URL from the `POSTGRES_*` variables
///
/// Returns `None` unless `POSTGRES_HOST` is set, so an explicit
/// `database.url` from file or prefixed env is left alone. Credentials are
/// percent-encoded.
pub fn postgres_url_from<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("POSTGRES_HOST").filter(|h| !h.is_empty())?;
    let user = lookup("POSTGRES_USER").unwrap_or_default();
    let password = lookup("POSTGRES_PASSWORD").unwrap_or_default();
    let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let db = lookup("POSTGRES_DB").unwrap_or_default();

    let mut url = match url::Url::parse(&format!("postgres://{}:{}/", host, port)) {
        Ok(url) => url,
        Err(e) => {
            warn!(host = %host, port = %port, error = %e, "Ignoring invalid POSTGRES_HOST/POSTGRES_PORT");
            return None;
        }
    };
    url.set_username(&user).ok()?;
    if !password.is_empty() {
        url.set_password(Some(&password)).ok()?;
    }
    url.set_path(&format!("/{}", db));

    Some(url.to_string())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                debug: false,
            },
            weather: WeatherConfig {
                api_key: String::new(),
                geo_base_url: "http://api.openweathermap.org".to_string(),
                api_base_url: "https://api.openweathermap.org".to_string(),
                timeout_seconds: None,
            },
            database: DatabaseConfig {
                backend: StorageBackend::Postgres,
                url: "postgresql://localhost/weather_buddy".to_string(),
                max_connections: 5,
                min_connections: 1,
                acquire_timeout_seconds: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                file_prefix: "weather-buddy.log".to_string(),
            },
        }
    }
}
