//! Common test utilities.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use quill::server::{self, AppState};
use quill::store::FilePostStore;

const TEST_REQUEST_TIMEOUT_SECONDS: u64 = 5;

/// Create a test app backed by a file store in a fresh temp directory.
///
/// Returns the router and the data file path. The file does not exist until
/// the first write, which is exactly the "never-created file" starting state
/// the handlers distinguish.
pub fn test_app() -> (Router, PathBuf) {
    let tmp = TempDir::new().unwrap();

    // Leak the TempDir so it doesn't get cleaned up during the test.
    // This is fine for tests - the OS will clean up on process exit.
    let tmp = Box::leak(Box::new(tmp));
    let data_path = tmp.path().join("data.json");

    let state = AppState {
        store: Arc::new(FilePostStore::new(&data_path)),
    };

    (
        server::build_app(state, TEST_REQUEST_TIMEOUT_SECONDS, None),
        data_path,
    )
}
