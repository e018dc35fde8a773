// LogSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the classify/filter/render pipeline
// 4. Error-to-exit-code mapping

use clap::Parser;
use logsift::app::run::{run, RunOptions};
use logsift::core::render::OutputFormat;
use logsift::util;
use std::path::PathBuf;

/// LogSift - command-line log classifier and filter.
///
/// Reads a log file, extracts timestamps and severity levels, applies
/// optional regex and date-range filters, and writes the surviving lines
/// as text, JSON, or CSV.
#[derive(Parser, Debug)]
#[command(name = "LogSift", version, about)]
struct Cli {
    /// Path to the log file to read.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Regex pattern to filter lines.
    #[arg(short = 'p', long = "pattern")]
    pattern: Option<String>,

    /// Include lines from this date onwards (YYYY-MM-DD, inclusive).
    #[arg(long = "start-date")]
    start_date: Option<String>,

    /// Include lines up to and including this date (YYYY-MM-DD).
    #[arg(long = "end-date")]
    end_date: Option<String>,

    /// Write output to this file instead of standard output.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format: text, json, or csv.
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogSift starting"
    );

    let options = RunOptions {
        input: cli.input,
        pattern: cli.pattern,
        start_date: cli.start_date,
        end_date: cli.end_date,
        output: cli.output,
        format: cli.format,
    };

    if let Err(e) = run(&options) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
