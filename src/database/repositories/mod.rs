//! Database repositories module
//!
//! This module contains the user store contract and its PostgreSQL
//! implementation. The in-memory implementation lives in `database::memory`.

pub mod user;

pub use user::UserRepository;

use async_trait::async_trait;
use crate::models::User;
use crate::utils::errors::Result;

/// Persistence contract for users and their saved city
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Check whether a row exists for the user
    async fn exists(&self, user_id: i64) -> Result<bool>;

    /// Insert a new user with no city; fails if the id is already taken
    async fn create(&self, user_id: i64) -> Result<()>;

    /// Read the saved city, empty when unset or when the user is unknown
    async fn get_city(&self, user_id: i64) -> Result<String>;

    /// Save the city, creating the user row if it does not exist yet
    async fn set_city(&self, user_id: i64, city: &str) -> Result<()>;

    /// Fetch the full user row
    async fn get_user(&self, user_id: i64) -> Result<Option<User>>;
}
