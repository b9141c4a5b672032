use core_config::{env_parse_or, env_required, ConfigError, FromEnv};
use sqlx::postgres::PgConnectOptions;

/// PostgreSQL connection configuration
///
/// Holds the connection coordinates and pool settings. Construct manually
/// or load from environment variables.
///
/// # Example
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::PostgresConfig;
///
/// // From environment variables
/// let config = PostgresConfig::from_env()?;
///
/// // Manual construction
/// let config = PostgresConfig::new("dbuser", "dbpass", "localhost", 5432, "dbname");
/// ```
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Database host
    pub host: String,

    /// Database port
    pub port: u16,

    /// Database name
    pub database: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl PostgresConfig {
    /// Create a new PostgresConfig with default pool settings
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port,
            database: database.into(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
        }
    }

    /// Convert this config into sqlx connect options
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .username(&self.user)
            .password(&self.password)
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
    }
}

/// Load PostgresConfig from environment variables
///
/// Required:
/// - `API_DB_USER`
/// - `API_DB_PASSWORD`
/// - `API_DB_HOST`
/// - `API_DB_PORT`
/// - `API_DB_DATABASE`
///
/// Optional:
/// - `DB_MAX_CONNECTIONS` (default: 10)
/// - `DB_MIN_CONNECTIONS` (default: 2)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_IDLE_TIMEOUT_SECS` (default: 300)
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let user = env_required("API_DB_USER")?;
        let password = env_required("API_DB_PASSWORD")?;
        let host = env_required("API_DB_HOST")?;
        let port = env_required("API_DB_PORT")?
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "API_DB_PORT".to_string(),
                details: format!("{}", e),
            })?;
        let database = env_required("API_DB_DATABASE")?;

        let max_connections = env_parse_or("DB_MAX_CONNECTIONS", 10)?;
        let min_connections = env_parse_or("DB_MIN_CONNECTIONS", 2)?;
        let acquire_timeout_secs = env_parse_or("DB_ACQUIRE_TIMEOUT_SECS", 8)?;
        let idle_timeout_secs = env_parse_or("DB_IDLE_TIMEOUT_SECS", 300)?;

        Ok(Self {
            user,
            password,
            host,
            port,
            database,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
        })
    }
}
