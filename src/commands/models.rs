use crate::output::ExportMode;
use crate::utils::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SUMMARY_ROWS};
use std::path::PathBuf;

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ParseArgs {
    /// Performance log to parse
    pub input: PathBuf,

    /// Output path for the CSV cost table
    pub output_csv: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Which buckets the exporters write
    pub mode: ExportMode,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of buckets in the text summary
    pub top_buckets: usize,

    /// Repeat function and parameter on every CSV row
    pub repeat_labels: bool,

    /// Write the CSV header row
    pub include_headers: bool,
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_json: None,
            mode: ExportMode::default(),
            print_summary: false,
            top_buckets: DEFAULT_SUMMARY_ROWS,
            repeat_labels: false,
            include_headers: true,
        }
    }
}

/// Outcome of a parse run
///
/// **Public** - returned from execute_parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Matched begin/end pairs
    pub records: usize,

    /// Distinct functions in the cost table
    pub functions: usize,

    /// Rows written to the CSV file
    pub rows_written: usize,
}
