//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, framing and extracting a trace log.
///
/// Every variant is fatal for the run that produced it.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Performance log not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read performance log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Structural mismatch at line {line}: {reason}")]
    StructuralMismatch { line: usize, reason: String },

    #[error("Malformed record at line {line}: {reason}")]
    RecordFormat { line: usize, reason: String },

    #[error("Invalid tick count '{value}' at line {line}")]
    NumericFormat { line: usize, value: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_mismatch_message() {
        let err = ParseError::StructuralMismatch {
            line: 4,
            reason: "unterminated begin record".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Structural mismatch at line 4: unterminated begin record"
        );
    }

    #[test]
    fn test_source_not_found_message() {
        let err = ParseError::SourceNotFound(PathBuf::from("missing.log"));
        assert!(err.to_string().contains("missing.log"));
    }
}
