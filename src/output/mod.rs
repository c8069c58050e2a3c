//! Output writers for cost tables.
//!
//! This module handles writing data to disk in various formats:
//! - CSV cost tables (function / parameter / cost columns)
//! - JSON reports with per-bucket statistics

pub mod csv;
pub mod json;
pub mod mode;
pub mod target;

// Re-export main functions
pub use self::csv::{table_to_csv_string, write_csv, write_csv_to, CsvConfig};
pub use self::json::{read_report, to_report, write_report};
pub use self::mode::ExportMode;
