//! Weather Buddy Telegram Bot
//!
//! A Telegram bot that remembers each user's city and answers `/weather`
//! with the current temperature there, using the OpenWeather API.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{WeatherBuddyError, WeatherError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, InMemoryUserStore, UserStore};
pub use handlers::{CommandDispatcher, IncomingMessage, ReplySender};
pub use services::{ServiceFactory, WeatherApi, WeatherService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
