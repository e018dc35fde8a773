// LogSift - app/run.rs
//
// Run orchestration: build the filter from CLI options, read the input
// file, classify lines in a single pass, render once, write the whole
// payload. App layer: owns all I/O; core stays pure.
//
// Either the whole run succeeds and the whole payload is written, or it
// aborts before any output is produced.

use crate::core::filter::{self, FilterSpec};
use crate::core::render::{self, OutputFormat};
use crate::util::error::{Result, SiftError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for one run, as resolved from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Log file to read.
    pub input: PathBuf,

    /// Regex filter source text. None = no pattern filter.
    pub pattern: Option<String>,

    /// Inclusive start date (YYYY-MM-DD). None = no lower bound.
    pub start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD). None = no upper bound.
    pub end_date: Option<String>,

    /// Output file. None = write to standard output.
    pub output: Option<PathBuf>,

    /// Output format.
    pub format: OutputFormat,
}

/// Execute a full run.
///
/// Configuration errors surface here, before the input file is opened.
/// Zero surviving lines is success with an empty payload.
pub fn run(options: &RunOptions) -> Result<()> {
    let spec = FilterSpec::from_args(
        options.pattern.as_deref(),
        options.start_date.as_deref(),
        options.end_date.as_deref(),
    )?;

    if spec.is_empty() {
        tracing::debug!("No filters configured; all lines pass");
    }

    let content = read_input(&options.input)?;
    let records = filter::apply_filter(&content, &spec);

    tracing::info!(
        input = %options.input.display(),
        records = records.len(),
        "Classification complete"
    );

    let payload = render::render(&records, options.format)?;
    write_output(options.output.as_deref(), &payload)
}

/// Read the full input file as a string.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are
/// fatal.
fn read_input(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| SiftError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the rendered payload in a single operation.
///
/// File output is byte-exact. Stdout output appends one trailing newline
/// so the payload does not run into the shell prompt.
fn write_output(output: Option<&Path>, payload: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, payload).map_err(|e| SiftError::Io {
                path: path.to_path_buf(),
                operation: "write",
                source: e,
            })?;
            tracing::info!(output = %path.display(), bytes = payload.len(), "Payload written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(payload.as_bytes())
                .and_then(|_| handle.write_all(b"\n"))
                .map_err(|e| SiftError::Io {
                    path: PathBuf::from("<stdout>"),
                    operation: "write",
                    source: e,
                })?;
        }
    }
    Ok(())
}
