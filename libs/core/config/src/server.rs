use crate::{env_or_default, env_parse_or, env_required, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            request_timeout_secs: 30,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables:
    /// - `API_HOST`: defaults to 0.0.0.0 (all interfaces)
    /// - `API_PORT`: required, no default
    /// - `API_REQUEST_TIMEOUT_SECS`: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("API_HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_required("API_PORT")?
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "API_PORT".to_string(),
                details: format!("{}", e),
            })?;
        let request_timeout_secs = env_parse_or("API_REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            request_timeout_secs,
        })
    }
}
