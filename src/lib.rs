//! Perflog Studio
//!
//! Per-function, per-parameter cost aggregation for indentation-framed
//! performance trace logs.
//!
//! A trace log prints a begin line when a call starts and an end line with
//! the exit tick count at the same indentation when it returns:
//!
//! ```text
//! CMainFrame.OnCreate:[35996247]
//!     Page.DataReady:[65535.36866.35997371]
//!     [35997371]
//! [35997417]
//! ```
//!
//! This crate pairs those lines, computes the tick delta of every call and
//! groups the costs by function and parameter signature, keeping the order
//! in which they first appear.
//!
//! ```
//! use perflog_studio::aggregator::build_cost_table;
//! use perflog_studio::parser::parse_log;
//!
//! let parsed = parse_log(vec!["Foo:[10]", "[25]"]).unwrap();
//! let table = build_cost_table(&parsed.records);
//! let costs: Vec<u32> = table.samples().map(|s| s.cost).collect();
//! assert_eq!(costs, vec![15]);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
