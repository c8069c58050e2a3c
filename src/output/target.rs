//! Output path validation and overwrite handling.

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Make an output path ready for writing
///
/// **Public** - shared by the CSV and JSON writers
///
/// Rejects empty paths and directories, creates missing parent directories
/// and removes a pre-existing file at the path.
pub fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_output_path(path)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if path.exists() {
        debug!("Replacing existing output: {}", path.display());
        std::fs::remove_file(path)?;
    }

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
pub fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        assert!(prepare_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_directory_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = prepare_output_path(temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_existing_file_removed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("old.csv");
        std::fs::write(&path, "stale").unwrap();

        prepare_output_path(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_parent_dirs_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested/dirs/out.csv");

        prepare_output_path(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }
}
