//! Configuration for the Exemplar API

use core_config::{server::ServerConfig, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
///
/// Required values make startup fail; optional values fall back with a
/// warning so a silent misconfiguration never goes unnoticed.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub environment: Environment,
    pub migrations_enabled: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        if std::env::var("APP_ENV").is_err() {
            tracing::warn!("APP_ENV is not set. Defaulting to the development environment.");
        }
        let environment = Environment::from_env();

        let server = ServerConfig::from_env()?;
        let database = PostgresConfig::from_env()?;

        let migrations_enabled = match std::env::var("API_DB_MIGRATIONS") {
            Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
            Err(_) => {
                tracing::warn!("API_DB_MIGRATIONS is not set. Database migrations are disabled.");
                false
            }
        };

        Ok(Self {
            server,
            database,
            environment,
            migrations_enabled,
        })
    }
}
