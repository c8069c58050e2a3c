//! Parse command implementation.
//!
//! The parse command:
//! 1. Reads the performance log
//! 2. Frames begin/end pairs and extracts records
//! 3. Aggregates records into the cost table
//! 4. Writes output files

use super::models::{ParseArgs, ParseOutcome};
use crate::aggregator::{build_cost_table, generate_text_summary, hottest_buckets};
use crate::output::{to_report, write_csv, write_report, CsvConfig};
use crate::parser::{parse_log, read_log_lines};
use crate::utils::config::MAX_SUMMARY_ROWS;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or unreadable log
/// * Structural, record or tick-count errors in the log
/// * File write errors
///
/// Nothing is written when the log fails to parse.
pub fn execute_parse(args: ParseArgs) -> Result<ParseOutcome> {
    let start_time = Instant::now();

    info!("Starting parse of: {}", args.input.display());

    // Step 1: Read log
    info!("Step 1/4: Reading performance log...");
    let lines = read_log_lines(&args.input)
        .with_context(|| format!("Failed to read log {}", args.input.display()))?;

    // Step 2: Frame and extract
    info!("Step 2/4: Pairing begin/end records...");
    let parsed = parse_log(lines).context("Failed to parse performance log")?;

    debug!(
        "Parsed {} records from {} lines (max depth {})",
        parsed.records.len(),
        parsed.line_count,
        parsed.max_depth
    );

    // Step 3: Aggregate
    info!("Step 3/4: Aggregating costs...");
    let table = build_cost_table(&parsed.records);

    debug!(
        "Aggregated {} samples across {} functions",
        table.sample_count(),
        table.len()
    );

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");
    let csv_config = CsvConfig {
        mode: args.mode,
        include_headers: args.include_headers,
        repeat_labels: args.repeat_labels,
    };

    let rows_written =
        write_csv(&table, &args.output_csv, &csv_config).context("Failed to write cost CSV")?;

    info!("✓ Costs written to: {}", args.output_csv.display());

    if let Some(json_path) = &args.output_json {
        let source = args.input.display().to_string();
        let report = to_report(&table, &source, args.mode);
        write_report(&report, json_path).context("Failed to write JSON report")?;

        info!("✓ Report written to: {}", json_path.display());
    }

    // Print text summary (if requested)
    if args.print_summary {
        let hot = hottest_buckets(&table, |b| args.mode.includes(b.label()), args.top_buckets);

        println!("\n{}", "=".repeat(80));
        println!("COST SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Log:        {}", args.input.display());
        println!("Records:    {}", parsed.records.len());
        println!("Functions:  {}", table.len());
        println!("Max Depth:  {}", parsed.max_depth);
        println!("Mode:       {}", args.mode);
        println!("\n{}", generate_text_summary(&hot));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Parse completed in {:.2}s", elapsed.as_secs_f64());

    Ok(ParseOutcome {
        records: parsed.records.len(),
        functions: table.len(),
        rows_written,
    })
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_args(args: &ParseArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input log path cannot be empty");
    }

    if args.output_csv.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if same_path(&args.input, &args.output_csv) {
        anyhow::bail!("Output path must differ from the input log");
    }

    if let Some(json_path) = &args.output_json {
        if json_path.as_os_str().is_empty() {
            anyhow::bail!("JSON report path cannot be empty");
        }

        if same_path(json_path, &args.input) {
            anyhow::bail!("JSON report path must differ from the input log");
        }

        if same_path(json_path, &args.output_csv) {
            anyhow::bail!("JSON report path must differ from the CSV output");
        }
    }

    if args.top_buckets == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_buckets > MAX_SUMMARY_ROWS {
        anyhow::bail!("top is too large (max {})", MAX_SUMMARY_ROWS);
    }

    Ok(())
}

/// Whether two paths name the same file once normalised
fn same_path(a: &Path, b: &Path) -> bool {
    match (normalize_path(a), normalize_path(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Existing files resolve through symlinks, others are made absolute
fn normalize_path(path: &Path) -> Option<PathBuf> {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .ok()
}
