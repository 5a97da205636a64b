//! In-memory user store
//!
//! Same contract as the PostgreSQL repository, kept in a process-local map.
//! Used by tests and by `database.backend = "memory"` for local runs.

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::database::repositories::UserStore;
use crate::models::User;
use crate::utils::errors::{WeatherBuddyError, Result};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, user_id: i64) -> Result<bool> {
        Ok(self.users.read().await.contains_key(&user_id))
    }

    async fn create(&self, user_id: i64) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user_id) {
            return Err(WeatherBuddyError::UserAlreadyExists { user_id });
        }
        users.insert(user_id, User::new(user_id));
        Ok(())
    }

    async fn get_city(&self, user_id: i64) -> Result<String> {
        Ok(self
            .users
            .read()
            .await
            .get(&user_id)
            .map(|user| user.city_or_empty().to_string())
            .unwrap_or_default())
    }

    async fn set_city(&self, user_id: i64, city: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users
            .entry(user_id)
            .or_insert_with(|| User::new(user_id))
            .city = Some(city.to_string());
        Ok(())
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}
