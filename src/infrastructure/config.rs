//! Application configuration
//!
//! Loaded from `config.toml` (or `./config/config.toml`) when present,
//! otherwise from defaults. `DATABASE_URL` overrides the configured store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub templates: TemplateConfig,
}

/// HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_address: String,
    pub port: u16,
}

/// Store connection and per-operation bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,
    /// Upper bound on any single repository call, in seconds
    pub statement_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error. `RUST_LOG` takes precedence.
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://postgres@localhost/newdb".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 8,
            statement_timeout_secs: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
        }
    }
}

impl HttpConfig {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn statement_timeout(&self) -> Duration {
        Duration::from_secs(self.statement_timeout_secs)
    }

    /// Connection URL with the password masked, for log output.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let Some((userinfo, host)) = rest.rsplit_once('@') else {
            return self.url.clone();
        };
        match userinfo.split_once(':') {
            Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
            None => self.url.clone(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.database.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("http.port must be greater than 0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("http.bind_address must not be empty".to_string()));
        }

        if self.database.url.is_empty() {
            return Err(ConfigError::Validation("database.url must not be empty".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        if self.database.acquire_timeout_secs == 0 || self.database.statement_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "database timeouts must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Loads, overrides and validates the configuration. Also returns the file it
/// came from, if any, so the caller can log it once logging is up.
pub fn load_config() -> Result<(Config, Option<PathBuf>), ConfigError> {
    let source = CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists());

    let mut config = match &source {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.apply_env();
    config.validate()?;

    Ok((config, source))
}
