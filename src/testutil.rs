//! Shared test helpers for in-crate tests.

use std::sync::Arc;

use crate::config::Config;
use crate::storage::Database;
use crate::AppState;

/// Create a test AppState backed by a database in a temporary directory.
pub fn test_state(temp_dir: &tempfile::TempDir) -> Arc<AppState> {
    test_state_with_limit(temp_dir, crate::config::DEFAULT_MAX_UPLOAD_SIZE)
}

/// Same as `test_state`, with a custom resume size ceiling.
pub fn test_state_with_limit(temp_dir: &tempfile::TempDir, max_upload_size: u64) -> Arc<AppState> {
    let data_dir = temp_dir.path().join("data");

    let config = Config {
        bind_address: "127.0.0.1:0".to_string(),
        data_dir: data_dir.to_string_lossy().to_string(),
        max_upload_size,
    };

    let db = Database::open(&data_dir).expect("Failed to open test database");

    Arc::new(AppState { config, db })
}
