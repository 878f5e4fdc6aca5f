//! Creates the data directory and database schema at startup.

use rusqlite::Connection;

use crate::{Error, config::StorageConfig, expense::create_expense_table};

/// Make sure the data directory and all tables exist.
///
/// This is safe to call on every start. Nothing existing is modified.
///
/// # Errors
/// Returns [Error::DataDirectory] if the directory cannot be created, or
/// [Error::SqlError] if the database cannot be opened or the schema cannot
/// be created.
pub fn initialize_storage(config: &StorageConfig) -> Result<(), Error> {
    std::fs::create_dir_all(config.data_dir()).map_err(|error| {
        Error::DataDirectory(format!("{}: {error}", config.data_dir().display()))
    })?;

    let connection = config.open_connection()?;
    initialize(&connection)?;

    tracing::info!("Database ready at {}", config.db_path().display());

    Ok(())
}

/// Create the tables for the domain models if they do not exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_expense_table(connection)
}
