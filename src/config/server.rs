//! Server configuration: TOML file, then `.env` / environment overrides.

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use serde::Deserialize;
use std::path::Path;

/// Config file read when `APISERVER_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/apiserver.toml";

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_max_connections() -> u32 {
    5
}

fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT
}

impl ServerConfig {
    /// Parse TOML text. Missing keys take defaults; validation is separate.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read the file at `APISERVER_CONFIG` (or [`DEFAULT_CONFIG_PATH`]), apply
    /// `DATABASE_URL` / `BIND_ADDR` from the environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("APISERVER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Environment wins over the file for the connection string and listen address.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DATABASE_URL").filter(|s| !s.is_empty()) {
            self.database_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDR").filter(|s| !s.is_empty()) {
            self.bind_addr = addr;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("database_url is required".into()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid("max_connections must be at least 1".into()));
        }
        Ok(())
    }
}
