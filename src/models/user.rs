//! User model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A bot user keyed by their Telegram user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered user with no city
    pub fn new(id: i64) -> Self {
        Self {
            id,
            city: None,
            created_at: Utc::now(),
        }
    }

    /// The saved city, or an empty string when unset
    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }
}
