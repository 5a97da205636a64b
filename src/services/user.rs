//! User service implementation
//!
//! Registration on first contact and city management on top of a `UserStore`.

use std::sync::Arc;
use tracing::{debug, info};
use crate::database::repositories::UserStore;
use crate::utils::errors::{WeatherBuddyError, Result};
use crate::utils::helpers::normalize_whitespace;

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Make sure a row exists for the user, creating it on first contact
    ///
    /// Returns `true` when a new row was created.
    pub async fn ensure_user(&self, telegram_id: i64) -> Result<bool> {
        if self.store.exists(telegram_id).await? {
            return Ok(false);
        }

        self.store.create(telegram_id).await?;
        info!(user_id = telegram_id, "New user registered");
        Ok(true)
    }

    /// Save the user's city, replacing any previous value
    ///
    /// Returns the city as stored, with whitespace collapsed.
    pub async fn set_city(&self, telegram_id: i64, city: &str) -> Result<String> {
        let city = normalize_whitespace(city);
        if city.is_empty() {
            return Err(WeatherBuddyError::InvalidInput("City name is empty".to_string()));
        }

        self.store.set_city(telegram_id, &city).await?;
        info!(user_id = telegram_id, city = %city, "User city updated");
        Ok(city)
    }

    /// Read the user's saved city, `None` when nothing is set
    pub async fn city(&self, telegram_id: i64) -> Result<Option<String>> {
        let city = self.store.get_city(telegram_id).await?;
        debug!(user_id = telegram_id, city = %city, "Loaded user city");
        Ok(if city.is_empty() { None } else { Some(city) })
    }
}
