//! Shared helpers for unit tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an empty temporary notebook folder
pub fn create_test_notebook_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Create a file in the notebook, creating parent folders for namespaced pages
pub fn create_test_file(dir: &TempDir, relative_path: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}
