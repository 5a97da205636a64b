//! Database service layer
//!
//! Picks the user store backend from configuration and owns its setup.

use std::sync::Arc;
use tracing::info;
use crate::config::{DatabaseConfig as DatabaseSettings, StorageBackend};
use crate::database::connection::{create_pool, run_migrations};
use crate::database::memory::InMemoryUserStore;
use crate::database::repositories::{UserRepository, UserStore};
use crate::utils::errors::WeatherBuddyError;

#[derive(Clone)]
pub struct DatabaseService {
    pub users: Arc<dyn UserStore>,
}

impl DatabaseService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Connect to the configured backend
    ///
    /// For PostgreSQL this pings the server and applies pending migrations;
    /// any failure is returned so startup can abort.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, WeatherBuddyError> {
        match settings.backend {
            StorageBackend::Postgres => {
                info!("Connecting to database...");
                let pool = create_pool(settings).await?;
                run_migrations(&pool).await?;
                Ok(Self::new(Arc::new(UserRepository::new(pool))))
            }
            StorageBackend::Memory => {
                info!("Using in-memory user store; saved cities are lost on restart");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
