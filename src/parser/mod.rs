//! Log parsing and schema definitions.
//!
//! This module handles:
//! - Reading the performance log into lines
//! - Pairing begin/end lines by indentation
//! - Extracting function, parameter and cost from each pair
//! - Defining the JSON report schema

pub mod framer;
pub mod perf_log;
pub mod record;
pub mod schema;
pub mod source;

// Re-export main types
pub use framer::{frame, BlockFramer, FramedPair};
pub use perf_log::{parse_log, ParsedLog};
pub use record::{extract_record, tick_delta, TraceRecord};
pub use schema::{CostStats, FunctionReport, ParameterReport, Report};
pub use source::read_log_lines;
