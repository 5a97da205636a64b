//! Services module
//!
//! This module contains business logic services

pub mod user;
pub mod weather;

// Re-export commonly used services
pub use user::UserService;
pub use weather::{WeatherApi, WeatherService};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::repositories::UserStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub user_service: UserService,
    pub weather_service: Arc<dyn WeatherApi>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory backed by the OpenWeather client
    pub fn new(settings: &Settings, user_store: Arc<dyn UserStore>) -> Result<Self> {
        let weather_service = WeatherService::new(&settings.weather)?;
        Ok(Self::with_weather(user_store, Arc::new(weather_service)))
    }

    /// Assemble services from already built parts
    pub fn with_weather(user_store: Arc<dyn UserStore>, weather_service: Arc<dyn WeatherApi>) -> Self {
        Self {
            user_service: UserService::new(user_store),
            weather_service,
        }
    }
}
