//! Database infrastructure

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use tracing::info;

use super::config::DatabaseConfig;

/// Owns the connection pool shared by every request.
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Connects and pings the store. An unreachable store is reported here so
    /// the process can abort before it starts listening.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        info!("Connecting to database: {}", config.redacted_url());

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        info!("Connected to the database");
        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
