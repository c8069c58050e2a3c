//! Line source for performance logs.
//!
//! Reads the whole log once and hands it to the framer as an ordered
//! sequence of newline-stripped lines.

use crate::utils::error::ParseError;
use log::debug;
use std::path::Path;

/// Read a performance log into its lines
///
/// **Public** - entry point used by the parse and check commands
///
/// # Errors
/// * `ParseError::SourceNotFound` - The log does not exist
/// * `ParseError::Io` - The log exists but could not be read
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ParseError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(ParseError::SourceNotFound(path.to_path_buf()));
    }

    debug!("Reading performance log: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let lines = split_lines(&content);

    debug!("Read {} lines ({} bytes)", lines.len(), content.len());

    Ok(lines)
}

/// Split raw log content into owned lines
///
/// Accepts both `\n` and `\r\n` endings. A trailing newline does not
/// produce an empty final line. A leading byte order mark is dropped.
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content.lines().map(str::to_string).collect()
}
