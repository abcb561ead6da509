//! Configuration management for the taskql service.
//!
//! Settings are layered, later sources winning:
//!
//! 1. Built-in defaults (`127.0.0.1:8080`, database in the data directory,
//!    `info` log level)
//! 2. `config.json` in the platform-specific data directory
//! 3. Environment variables (`TASKQL_HOST`, `TASKQL_PORT`, `TASKQL_DB`,
//!    `TASKQL_LOG`), including those loaded from a `.env` file
//! 4. Command-line flags of `taskql serve`
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\taskql\config.json`
//! - **macOS**: `~/Library/Application Support/taskql/config.json`
//! - **Linux**: `$XDG_DATA_HOME/taskql/config.json` or `~/.local/share/taskql/config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskql::libs::config::Config;
//!
//! let config = Config::read()?.apply_env()?;
//! println!("Serving on {}", config.server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_HOST: &str = "TASKQL_HOST";
pub const ENV_PORT: &str = "TASKQL_PORT";
pub const ENV_DB: &str = "TASKQL_DB";
pub const ENV_LOG: &str = "TASKQL_LOG";

/// Listening address of the HTTP server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Location of the SQLite database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DatabaseConfig {
    /// Explicit database file. When `None`, `taskql.db` in the data
    /// directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Root configuration object.
///
/// Every section has a default, so a partial `config.json` (or none at all)
/// is valid.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path of the configuration file in the data directory.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration file, falling back to defaults when it does
    /// not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    /// Writes the configuration as pretty-printed JSON and returns the path
    /// written to.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns the removed path, or `None`
    /// if there was nothing to remove.
    pub fn delete() -> Result<Option<PathBuf>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }
        fs::remove_file(&path)?;
        Ok(Some(path))
    }

    /// Applies `TASKQL_*` environment overrides.
    pub fn apply_env(self) -> Result<Config> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Blank values are
    /// ignored; an unparsable port is an error.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| msg_error_anyhow!(Message::ConfigInvalidPort(port.clone())))?;
        }
        if let Some(path) = lookup(ENV_DB) {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level;
        }
        Ok(self)
    }

    /// Resolved database file location.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
