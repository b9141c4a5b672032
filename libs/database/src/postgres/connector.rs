use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use super::PostgresConfig;

/// Connect to PostgreSQL and build the connection pool
///
/// The pool is the process-wide source of connections; units of work check
/// single connections out of it per transaction.
///
/// # Example
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::{self, PostgresConfig};
///
/// let config = PostgresConfig::from_env()?;
/// let pool = postgres::connect(&config).await?;
/// ```
pub async fn connect(config: &PostgresConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(config.connect_options())
        .await?;

    info!(
        host = %config.host,
        database = %config.database,
        max_connections = config.max_connections,
        "Successfully connected to PostgreSQL database"
    );

    Ok(pool)
}

/// Run database migrations with the provided embedded migrator
///
/// The migration files live in the app (embedded via `sqlx::migrate!`);
/// the running logic is here.
///
/// # Example
/// ```ignore
/// use database::postgres::run_migrations;
///
/// static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
///
/// run_migrations(&pool, &MIGRATOR, "my_app").await?;
/// ```
pub async fn run_migrations(
    pool: &PgPool,
    migrator: &Migrator,
    app_name: &str,
) -> Result<(), MigrateError> {
    info!("Running {} database migrations...", app_name);
    migrator.run(pool).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
