//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Parameter label used when a begin line carries no parameter signature
pub const DEFAULT_PARAMETER_LABEL: &str = "default";

/// Separator between the parameter signature and the begin tick
pub const PARAMETER_SEPARATOR: char = '.';

// Line patterns for the trace format:
//   CMainFrame.OnCreate:[35996247]
//   Page.DataReady:[65535.36866.35997371]
//   Obj.ResetSize: [35997339]
//       [35997417]
pub const BEGIN_LINE_PATTERN: &str = r"(\S+)\s*:\s*\[(.+)\]";
pub const END_LINE_PATTERN: &str = r"\s*\[(\d+)\]";

/// Column headers of the tabular export
pub const CSV_HEADERS: [&str; 3] = ["function", "parameter", "cost"];

/// Default output path for the tabular export
pub const DEFAULT_OUTPUT_PATH: &str = "costs.csv";

/// Number of buckets shown by the text summary
pub const DEFAULT_SUMMARY_ROWS: usize = 10;
pub const MAX_SUMMARY_ROWS: usize = 1000;
