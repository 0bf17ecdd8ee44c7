use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(String),
}

/// Read a report document and return its paragraph lines, trimmed, in
/// source order.
pub fn read_document_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Scan for report documents in the input directory
pub fn scan_report_files(input_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !input_root.exists() {
        return Err(IoError::InvalidInputDir(
            "input directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(input_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "txt"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_input_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidInputDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
