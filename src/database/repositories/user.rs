//! User repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use chrono::Utc;
use crate::models::User;
use crate::utils::errors::Result;
use super::UserStore;

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn exists(&self, user_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn create(&self, user_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO users (id) VALUES ($1)")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_city(&self, user_id: i64) -> Result<String> {
        let city: Option<String> = sqlx::query_scalar("SELECT COALESCE(city, '') FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(city.unwrap_or_default())
    }

    async fn set_city(&self, user_id: i64, city: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, city, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET city = EXCLUDED.city
            "#
        )
        .bind(user_id)
        .bind(city)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, city, created_at FROM users WHERE id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
