//! PostgreSQL data access for events and their planning artefacts.
//!
//! Each table gets a zero-sized repository in [`repositories`] and a row
//! struct plus input DTOs in [`models`].

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::DbConfig;
pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.database_url)
        .await
        .map_err(DbError::Connect)?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );
    Ok(pool)
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
