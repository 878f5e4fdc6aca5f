use tempfile::TempDir;

use crate::{config::StorageConfig, db::initialize_storage};

/// Create an initialized database in a fresh temporary directory.
///
/// The database is deleted when the returned [TempDir] is dropped, so keep it
/// alive for the duration of the test.
pub(crate) fn get_test_storage() -> (TempDir, StorageConfig) {
    let temp_dir = TempDir::new().expect("Could not create temporary directory");
    let storage = StorageConfig::new(temp_dir.path());
    initialize_storage(&storage).expect("Could not initialize test database");

    (temp_dir, storage)
}
