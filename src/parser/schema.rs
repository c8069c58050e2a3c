//! Output JSON schema definitions for cost reports.
//!
//! This module defines the structure of JSON reports we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file the report was built from
    pub source: String,

    /// Export mode used ("simple" or "complete")
    pub mode: String,

    /// Number of cost samples included in the report
    pub total_records: u64,

    /// Functions in first-seen order
    pub functions: Vec<FunctionReport>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Costs recorded for one function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionReport {
    pub name: String,

    /// Parameter buckets in first-seen order
    pub parameters: Vec<ParameterReport>,
}

/// Costs recorded for one parameter label of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterReport {
    pub label: String,

    /// Raw samples in log order
    pub samples: Vec<u32>,

    pub stats: CostStats,
}

/// Summary statistics over a bucket of samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostStats {
    pub count: usize,

    /// Sum of samples (widened, cannot wrap)
    pub total: u64,
    pub min: u32,
    pub max: u32,
    pub mean: f64,

    /// Middle sample after sorting. Even-sized buckets take the upper of
    /// the two middle values rather than averaging them.
    pub median: u32,
}
