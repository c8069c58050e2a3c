//! Ordered two-level cost table.
//!
//! function name -> parameter label -> samples
//!
//! Both key levels keep first-insertion order, and samples keep log order.
//! Storage is a `Vec` per level with a `HashMap` from key to position.

use crate::parser::TraceRecord;
use std::collections::HashMap;

/// Samples recorded for one parameter label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterBucket {
    label: String,
    samples: Vec<u32>,
}

impl ParameterBucket {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            samples: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Samples in insertion order
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }
}

/// Parameter buckets recorded for one function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    name: String,
    buckets: Vec<ParameterBucket>,
    index: HashMap<String, usize>,
}

impl FunctionRecord {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Buckets in first-seen label order
    pub fn buckets(&self) -> &[ParameterBucket] {
        &self.buckets
    }

    /// Look up a bucket by label
    pub fn bucket(&self, label: &str) -> Option<&ParameterBucket> {
        self.index.get(label).map(|&i| &self.buckets[i])
    }

    /// Total number of samples across all buckets
    pub fn sample_count(&self) -> usize {
        self.buckets.iter().map(|b| b.samples.len()).sum()
    }

    fn push(&mut self, label: &str, cost: u32) {
        let idx = match self.index.get(label) {
            Some(&i) => i,
            None => {
                self.buckets.push(ParameterBucket::new(label));
                self.index.insert(label.to_string(), self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };
        self.buckets[idx].samples.push(cost);
    }
}

/// One (function, parameter, cost) triple yielded by [`CostTable::samples`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostEntry<'a> {
    pub function: &'a str,
    pub parameter: &'a str,
    pub cost: u32,
}

/// Aggregated costs for one log
///
/// **Public** - built by the aggregator, read by the exporters
///
/// Write-only during a run: entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostTable {
    functions: Vec<FunctionRecord>,
    index: HashMap<String, usize>,
    sample_count: usize,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cost sample
    ///
    /// **Public** - main aggregation entry point
    ///
    /// The first insertion of a function or of a label within a function
    /// fixes its position in iteration order.
    pub fn insert(&mut self, function: &str, parameter: &str, cost: u32) {
        let idx = match self.index.get(function) {
            Some(&i) => i,
            None => {
                self.functions.push(FunctionRecord::new(function));
                self.index.insert(function.to_string(), self.functions.len() - 1);
                self.functions.len() - 1
            }
        };
        self.functions[idx].push(parameter, cost);
        self.sample_count += 1;
    }

    /// Append an extracted record
    pub fn insert_record(&mut self, record: &TraceRecord) {
        self.insert(&record.function, &record.parameter, record.cost);
    }

    /// Functions in first-seen order
    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    /// Look up a function by name
    pub fn function(&self, name: &str) -> Option<&FunctionRecord> {
        self.index.get(name).map(|&i| &self.functions[i])
    }

    /// Number of distinct functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Total number of samples
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Walk every sample once
    ///
    /// Function order, then label order, then sample order. Each call
    /// starts a fresh traversal.
    pub fn samples(&self) -> impl Iterator<Item = CostEntry<'_>> + '_ {
        self.functions.iter().flat_map(|func| {
            func.buckets.iter().flat_map(move |bucket| {
                bucket.samples.iter().map(move |&cost| CostEntry {
                    function: &func.name,
                    parameter: &bucket.label,
                    cost,
                })
            })
        })
    }
}

impl Extend<TraceRecord> for CostTable {
    fn extend<T: IntoIterator<Item = TraceRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert_record(&record);
        }
    }
}

impl FromIterator<TraceRecord> for CostTable {
    fn from_iter<T: IntoIterator<Item = TraceRecord>>(iter: T) -> Self {
        let mut table = CostTable::new();
        table.extend(iter);
        table
    }
}

/// Build a cost table from extracted records
///
/// **Public** - used by commands after parsing
pub fn build_cost_table(records: &[TraceRecord]) -> CostTable {
    let mut table = CostTable::new();
    for record in records {
        table.insert_record(record);
    }
    table
}
