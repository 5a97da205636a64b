//! PostgreSQL pool setup and migrations

use std::time::Duration;
use sqlx::postgres::{PgPool, PgPoolOptions};
use crate::config::DatabaseConfig;
use crate::utils::errors::WeatherBuddyError;

pub type DatabasePool = PgPool;

/// Pool limits taken from the database settings
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
}

/// Open the pool and ping the server once
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, WeatherBuddyError> {
    let pool = pool_options(config).connect(&config.url).await?;
    health_check(&pool).await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Apply pending migrations from `./migrations`
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), WeatherBuddyError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}

pub async fn health_check(pool: &DatabasePool) -> Result<(), WeatherBuddyError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
