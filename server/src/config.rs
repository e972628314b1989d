//! Configuration management for the server.

use shelf_engine::IdStrategy;
use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// JSON file holding the catalog
    pub data_file: PathBuf,
    /// How ids are assigned to new books
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            data_file: PathBuf::from("data.json"),
            id_strategy: IdStrategy::LastPlusOne,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.port,
        };

        let data_file = lookup("CATALOG_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let id_strategy = match lookup("CATALOG_ID_STRATEGY") {
            Some(value) => parse_id_strategy(value)?,
            None => defaults.id_strategy,
        };

        Ok(Self {
            host,
            port,
            data_file,
            id_strategy,
        })
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `last` or `max`.
fn parse_id_strategy(value: String) -> Result<IdStrategy, ConfigError> {
    match value.as_str() {
        "last" => Ok(IdStrategy::LastPlusOne),
        "max" => Ok(IdStrategy::MaxPlusOne),
        _ => Err(ConfigError::InvalidIdStrategy(value)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid CATALOG_ID_STRATEGY value: {0} (expected `last` or `max`)")]
    InvalidIdStrategy(String),
}
