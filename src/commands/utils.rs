use crate::aggregator::build_cost_table;
use crate::output::read_report;
use crate::parser::{parse_log, read_log_lines};
use crate::utils::config::{CSV_HEADERS, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Check that a performance log frames and extracts cleanly
///
/// Returns the number of records found.
pub fn check_log_file(file_path: &Path) -> Result<usize> {
    println!("Checking log: {}", file_path.display());

    let lines = read_log_lines(file_path)
        .with_context(|| format!("Failed to read log {}", file_path.display()))?;
    let parsed = parse_log(lines).context("Log is not well formed")?;
    let table = build_cost_table(&parsed.records);

    println!("✓ Well-formed performance log");
    println!("  Lines: {}", parsed.line_count);
    println!("  Records: {}", parsed.records.len());
    println!("  Functions: {}", table.len());
    println!("  Max Depth: {}", parsed.max_depth);

    Ok(parsed.records.len())
}

/// Inspect a JSON report file
pub fn inspect_report_file(file_path: &Path) -> Result<()> {
    println!("Inspecting report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Mode: {}", report.mode);
    println!("  Records: {}", report.total_records);
    println!("  Functions: {}", report.functions.len());
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Perflog Studio Output Schema");
    println!("Current Report Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("CSV Columns: {}", CSV_HEADERS.join(", "));
        println!("  function: string   - Function name (first row of its block)");
        println!("  parameter: string  - Parameter label, 'default' when absent");
        println!("  cost: number       - End tick minus begin tick (32-bit wrapping)");
        println!();
        println!("JSON Report Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Log file path");
        println!("  mode: string             - 'simple' or 'complete'");
        println!("  total_records: number    - Samples included");
        println!("  functions: array         - Functions in first-seen order");
        println!("    name: string           - Function name");
        println!("    parameters: array      - Buckets in first-seen order");
        println!("      label: string        - Parameter label");
        println!("      samples: array       - Costs in log order");
        println!("      stats: object        - count, total, min, max, mean, median (upper middle)");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Perflog Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Per-function, per-parameter cost aggregation for performance trace logs.");
}
