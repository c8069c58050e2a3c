//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod parse;
pub mod utils;

// Re-export main command functions
pub use models::{ParseArgs, ParseOutcome};
pub use parse::{execute_parse, validate_args};
pub use utils::{check_log_file, display_schema, display_version, inspect_report_file};
