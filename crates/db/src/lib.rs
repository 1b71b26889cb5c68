//! Persistence layer for the cinema service: connection pool, schema
//! migrations, row models and repositories.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool and verify the store is reachable.
///
/// `connect_with` opens the first connection eagerly, so an unreachable or
/// misconfigured store fails here rather than on the first request.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the store.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Cinema schema is up to date");
    Ok(())
}
