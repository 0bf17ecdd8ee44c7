use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary input directory for test documents
pub fn create_test_input_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test report document with content
pub fn create_test_file(input_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = input_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
