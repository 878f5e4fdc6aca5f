//! Where the expense database lives and how connections to it are opened.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::Error;

/// The directory used for the database when none is given.
pub const DEFAULT_DATA_DIR: &str = "instance";

/// The file name of the SQLite database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "expenses.db";

/// The location of the expense database.
///
/// Handlers receive a copy of this value and open a fresh connection for
/// each request, see [StorageConfig::open_connection].
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    data_dir: PathBuf,
}

impl StorageConfig {
    /// Create a config that stores the database in `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory that holds the database file.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The path to the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Open a new connection to the database.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the database file cannot be opened.
    pub fn open_connection(&self) -> Result<Connection, Error> {
        Connection::open(self.db_path()).map_err(Error::from)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
