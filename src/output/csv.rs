//! Tabular CSV writer for cost tables.
//!
//! Three columns: function, parameter, cost. By default the function name
//! only appears on the first row of its block and the parameter label on the
//! first row of its bucket, the way the costs spreadsheet is read.

use super::mode::ExportMode;
use super::target::{file_size, prepare_output_path};
use crate::aggregator::CostTable;
use crate::utils::config::CSV_HEADERS;
use crate::utils::error::OutputError;
use log::info;
use std::io::Write;
use std::path::Path;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Which buckets to write (default: simple)
    pub mode: ExportMode,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Repeat function and parameter on every row (default: false)
    pub repeat_labels: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            mode: ExportMode::Simple,
            include_headers: true,
            repeat_labels: false,
        }
    }
}

impl CsvConfig {
    pub fn with_mode(mut self, mode: ExportMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Write a cost table to a CSV file
///
/// **Public** - main entry point for tabular output
///
/// An existing file at `output_path` is replaced.
///
/// # Returns
/// Number of cost rows written (header excluded)
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty or a directory
/// * `OutputError::WriteFailed` - I/O error while preparing the path
/// * `OutputError::Csv` - Error while writing records
pub fn write_csv(
    table: &CostTable,
    output_path: impl AsRef<Path>,
    config: &CsvConfig,
) -> Result<usize, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing costs to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = std::fs::File::create(output_path)?;
    let rows = write_csv_to(table, file, config)?;

    info!(
        "CSV written successfully ({} rows, {} bytes)",
        rows,
        file_size(output_path)
    );

    Ok(rows)
}

/// Render a cost table as a CSV string
///
/// **Public** - useful for tests and in-memory use
pub fn table_to_csv_string(table: &CostTable, config: &CsvConfig) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_csv_to(table, &mut buffer, config)?;
    String::from_utf8(buffer)
        .map_err(|e| OutputError::InvalidPath(format!("CSV output is not UTF-8: {}", e)))
}

/// Write CSV records to any writer
///
/// Returns the number of cost rows written.
pub fn write_csv_to<W: Write>(
    table: &CostTable,
    writer: W,
    config: &CsvConfig,
) -> Result<usize, OutputError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(CSV_HEADERS)?;
    }

    let mut rows = 0;
    for func in table.functions() {
        let mut first_in_function = true;

        for bucket in func.buckets() {
            if !config.mode.includes(bucket.label()) {
                continue;
            }

            for (i, cost) in bucket.samples().iter().enumerate() {
                let show_function = config.repeat_labels || first_in_function;
                let show_label = config.repeat_labels || i == 0;
                let cost = cost.to_string();

                wtr.write_record([
                    if show_function { func.name() } else { "" },
                    if show_label { bucket.label() } else { "" },
                    cost.as_str(),
                ])?;

                first_in_function = false;
                rows += 1;
            }
        }
    }

    wtr.flush()?;

    Ok(rows)
}
