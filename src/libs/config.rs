//! Application configuration.
//!
//! The configuration is a small JSON file in the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\todo-cli\config.json`
//! - **macOS**: `~/Library/Application Support/todo-cli/config.json`
//! - **Linux**: `~/.local/share/todo-cli/config.json`
//!
//! A missing file is not an error, it yields [`Config::default`]. A file that
//! exists but cannot be parsed is reported instead of being silently replaced.
//!
//! ```json
//! {
//!   "database": { "path": "/home/me/todo.db" }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_cli::libs::config::Config;
//! use todo_cli::libs::data_storage::DataStorage;
//!
//! let config = Config::read()?;
//! let db_path = config.database_path(&DataStorage::new())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database location settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Path of the SQLite file holding the `todos` table.
    pub path: PathBuf,
}

/// Root configuration object.
///
/// Every section is optional; an absent section falls back to built-in
/// defaults and is omitted when the file is written back.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError(path.display().to_string())))
    }

    /// Saves the configuration into the data directory and returns its path.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    /// Writes pretty-printed JSON to `path`, replacing any existing file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database file to open: the configured path, or `todo.db` in `storage`.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.database {
            Some(database) => Ok(database.path.clone()),
            None => storage.get_path(DB_FILE_NAME),
        }
    }
}
