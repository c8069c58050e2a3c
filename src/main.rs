//! Perflog Studio CLI
//!
//! Aggregates per-function, per-parameter tick costs from
//! indentation-framed performance trace logs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use perflog_studio::commands::{
    check_log_file, display_schema, display_version, execute_parse, inspect_report_file,
    validate_args, ParseArgs,
};
use perflog_studio::output::ExportMode;
use perflog_studio::utils::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SUMMARY_ROWS};
use std::path::PathBuf;

/// Perflog Studio - cost aggregation for performance trace logs
#[derive(Parser, Debug)]
#[command(name = "perflog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a performance log and export aggregated costs
    Parse {
        /// Performance log to parse
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the CSV cost table
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Presentation mode: simple omits "default" buckets
        #[arg(short, long, value_enum, default_value_t = ExportMode::Simple)]
        mode: ExportMode,

        /// Output path for a JSON report (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of buckets in the text summary
        #[arg(long, default_value_t = DEFAULT_SUMMARY_ROWS)]
        top: usize,

        /// Repeat function and parameter on every CSV row
        #[arg(long)]
        repeat_labels: bool,

        /// Omit the CSV header row
        #[arg(long)]
        no_header: bool,
    },

    /// Check that a performance log is well formed
    Check {
        /// Performance log to check
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect a JSON report file
    Inspect {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display output schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Parse {
            input,
            output,
            mode,
            json,
            summary,
            top,
            repeat_labels,
            no_header,
        } => {
            let args = ParseArgs {
                input,
                output_csv: output,
                output_json: json,
                mode,
                print_summary: summary,
                top_buckets: top,
                repeat_labels,
                include_headers: !no_header,
            };

            // Validate args first
            validate_args(&args)?;

            execute_parse(args)?;
        }

        Commands::Check { input } => {
            check_log_file(&input)?;
        }

        Commands::Inspect { file } => {
            inspect_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
