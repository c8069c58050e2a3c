//! Aggregation of extracted records into the cost table and metrics.
//!
//! This module transforms extracted trace records into:
//! - An insertion-ordered function -> parameter -> samples table
//! - Per-bucket cost statistics
//! - Hot bucket ranking for the text summary

pub mod cost_table;
pub mod metrics;

// Re-export main types and functions
pub use cost_table::{build_cost_table, CostEntry, CostTable, FunctionRecord, ParameterBucket};
pub use metrics::{calculate_cost_stats, generate_text_summary, hottest_buckets, HotBucket};
