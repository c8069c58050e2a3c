//! JSON report output writer.
//!
//! Builds a versioned [`Report`] from a cost table and writes it to disk
//! with proper formatting.

use super::mode::ExportMode;
use super::target::{file_size, prepare_output_path};
use crate::aggregator::{calculate_cost_stats, CostTable};
use crate::parser::schema::{FunctionReport, ParameterReport, Report};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Convert a cost table to the report format
///
/// **Public** - used by commands to create the JSON output
///
/// Functions with no bucket left after mode filtering are dropped.
pub fn to_report(table: &CostTable, source: &str, mode: ExportMode) -> Report {
    use chrono::Utc;

    let functions: Vec<FunctionReport> = table
        .functions()
        .iter()
        .filter_map(|func| {
            let parameters: Vec<ParameterReport> = func
                .buckets()
                .iter()
                .filter(|b| mode.includes(b.label()))
                .map(|bucket| ParameterReport {
                    label: bucket.label().to_string(),
                    samples: bucket.samples().to_vec(),
                    stats: calculate_cost_stats(bucket.samples()),
                })
                .collect();

            (!parameters.is_empty()).then(|| FunctionReport {
                name: func.name().to_string(),
                parameters,
            })
        })
        .collect();

    let total_records = functions
        .iter()
        .flat_map(|f| f.parameters.iter())
        .map(|p| p.samples.len() as u64)
        .sum();

    Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        mode: mode.to_string(),
        total_records,
        functions,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    let writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - used by the inspect command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: Report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} functions",
        report.version,
        report.functions.len()
    );

    Ok(report)
}
