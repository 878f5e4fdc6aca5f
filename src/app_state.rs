//! Implements a struct that holds the state of the REST server.

use crate::{Error, config::StorageConfig, db::initialize_storage};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where the expense database lives.
    pub storage: StorageConfig,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to decide what "today" is for the monthly total and export file name.
    /// When `None`, the server's own local offset is used.
    pub local_timezone: Option<String>,
}

impl AppState {
    /// Create a new [AppState] for the database described by `storage`.
    ///
    /// This function will create the data directory and the tables for the
    /// domain models if they do not exist.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland",
    /// or `None` to follow the server's local time.
    ///
    /// # Errors
    /// Returns an error if the storage cannot be initialized.
    pub fn new(storage: StorageConfig, local_timezone: Option<&str>) -> Result<Self, Error> {
        initialize_storage(&storage)?;

        Ok(Self {
            storage,
            local_timezone: local_timezone.map(str::to_owned),
        })
    }
}
