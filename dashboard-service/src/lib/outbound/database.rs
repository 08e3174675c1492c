use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Open the bounded connection pool shared by every Postgres repository.
///
/// Each query checks a connection out of the pool and returns it when the
/// query future completes or is dropped.
///
/// # Errors
/// Returns error if the database URL is invalid or the first connection fails
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        database = "postgresql",
        "Database connection pool created"
    );

    Ok(pool)
}
