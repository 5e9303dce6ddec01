//! Startup configuration read from environment variables.
//!
//! - `DAGSTORE_DB_PATH`: SQLite database file path (default: "dagstore.db",
//!   ":memory:" for a private in-memory database)
//! - `DAGSTORE_BACKEND`: "sqlite" (default) or "memory"
//! - `DAGSTORE_HOST`: listen address (default: "0.0.0.0")
//! - `DAGSTORE_PORT`: listen port (default: "8000")

use std::fmt;
use std::str::FromStr;

use crate::service::GraphService;

/// Which [`GraphStore`](dagstore_storage::GraphStore) backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "memory" => Ok(Backend::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sqlite => write!(f, "sqlite"),
            Backend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DAGSTORE_PORT {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),

    #[error("unknown DAGSTORE_BACKEND {0:?}: expected \"sqlite\" or \"memory\"")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub backend: Backend,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: "dagstore.db".to_string(),
            backend: Backend::Sqlite,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        ServerConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset variables
    /// take their defaults; set but unparseable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ServerConfig::default();

        if let Some(path) = lookup("DAGSTORE_DB_PATH") {
            config.db_path = path;
        }
        if let Some(backend) = lookup("DAGSTORE_BACKEND") {
            config.backend = backend.parse()?;
        }
        if let Some(host) = lookup("DAGSTORE_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("DAGSTORE_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Opens the configured backend.
    pub fn open_service(&self) -> Result<GraphService, crate::error::ServiceError> {
        match self.backend {
            Backend::Sqlite => GraphService::new(&self.db_path),
            Backend::Memory => Ok(GraphService::in_memory()),
        }
    }
}
