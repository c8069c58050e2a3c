//! Performance log parser.
//!
//! Drives the framer over the log lines and extracts one record per
//! matched pair. The first structural or record error aborts the parse,
//! so a failed parse never yields partial records.

use super::framer::frame;
use super::record::{extract_record, TraceRecord};
use crate::utils::error::ParseError;

/// Parsed log data (internal representation)
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    /// Records in the order their end lines appear
    pub records: Vec<TraceRecord>,

    /// Total lines consumed
    pub line_count: usize,

    /// Deepest call nesting seen
    pub max_depth: usize,
}

/// Parse log lines into records
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `lines` - Newline-stripped log lines in file order
///
/// # Errors
/// * `ParseError::StructuralMismatch` - Lines cannot be paired by indentation
/// * `ParseError::RecordFormat` - A paired line has the wrong shape
/// * `ParseError::NumericFormat` - A tick count is not a valid `u32`
pub fn parse_log<I, S>(lines: I) -> Result<ParsedLog, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut framer = frame(lines);
    let mut records = Vec::new();

    for pair in framer.by_ref() {
        records.push(extract_record(&pair?)?);
    }

    Ok(ParsedLog {
        records,
        line_count: framer.lines_read(),
        max_depth: framer.max_depth(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_counts() {
        let parsed = parse_log(vec![
            "A:[100]",
            "  B:[7.110]",
            "  [150]",
            "[200]",
        ])
        .unwrap();

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.line_count, 4);
        assert_eq!(parsed.max_depth, 2);
        assert_eq!(parsed.records[0].function, "B");
        assert_eq!(parsed.records[0].parameter, "7");
        assert_eq!(parsed.records[0].cost, 40);
    }

    #[test]
    fn test_parse_log_propagates_record_error() {
        let result = parse_log(vec!["A:[100]", "oops"]);
        assert!(matches!(result, Err(ParseError::RecordFormat { line: 2, .. })));
    }
}
