//! Environment-driven configuration.
//!
//! `ROLLUP_HTTP_SERVER_URL` is only needed by the binary; the library
//! reads the store settings.

use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = "/var/lib/notary/notary.db";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Unknown store backend {0:?} (expected \"sqlite\" or \"memory\")")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotaryConfig {
    pub rollup_server_url: Option<String>,
    pub db_path: String,
    pub store: StoreBackend,
}

impl Default for NotaryConfig {
    fn default() -> Self {
        Self {
            rollup_server_url: None,
            db_path: DEFAULT_DB_PATH.to_string(),
            store: StoreBackend::Sqlite,
        }
    }
}

impl NotaryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let store = match lookup("NOTARY_STORE") {
            Some(raw) => raw.parse()?,
            None => defaults.store,
        };

        Ok(Self {
            rollup_server_url: lookup("ROLLUP_HTTP_SERVER_URL"),
            db_path: lookup("NOTARY_DB_PATH").unwrap_or(defaults.db_path),
            store,
        })
    }

    pub fn require_rollup_server_url(&self) -> Result<&str, ConfigError> {
        self.rollup_server_url
            .as_deref()
            .ok_or(ConfigError::Missing("ROLLUP_HTTP_SERVER_URL"))
    }
}
