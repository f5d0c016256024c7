use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "todo.db";

/// Environment variable overriding the configured database path.
pub const DB_PATH_ENV: &str = "TODO_DB_PATH";

/// Owner of the SQLite connection.
///
/// The connection is closed when the `Db` is dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database resolved from the environment and configuration.
    ///
    /// `TODO_DB_PATH` wins over `config.json`, which wins over the default
    /// `todo.db` in the data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = match env::var_os(DB_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Config::read()?.database_path(&DataStorage::new())?,
        };
        Self::open(&db_file_path)
    }

    /// Opens (or creates) the database file at `path` and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn })
    }

    /// Private in-memory database with the schema applied.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a raw connection without running migrations.
    pub fn new_without_migrations(path: &Path) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}
