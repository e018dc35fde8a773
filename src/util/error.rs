// LogSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogSift operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SiftError {
    /// Filter configuration failed (bad regex or date arguments).
    Filter(FilterError),

    /// Output rendering failed.
    Render(RenderError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Render(e) => write!(f, "Render error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Filter(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors raised while building the per-run filter from CLI arguments.
/// All of these are fatal configuration errors, surfaced before any line
/// of input is processed.
#[derive(Debug)]
pub enum FilterError {
    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// User-provided regex exceeds the maximum allowed length.
    PatternTooLong { length: usize, max_length: usize },

    /// A `--start-date` / `--end-date` value is not a valid `YYYY-MM-DD` date.
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// An end date so late that the day after it is unrepresentable.
    /// Rejected rather than silently dropping the bound, which would change
    /// how lines without timestamps are filtered.
    DateOutOfRange { value: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid filter regex '{pattern}': {source}")
            }
            Self::PatternTooLong { length, max_length } => write!(
                f,
                "Filter regex is {length} chars, exceeds maximum of {max_length}"
            ),
            Self::InvalidDate { value, source } => {
                write!(f, "Invalid date '{value}' (expected YYYY-MM-DD): {source}")
            }
            Self::DateOutOfRange { value } => {
                write!(f, "End date '{value}' is out of the supported range")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            Self::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FilterError> for SiftError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors raised while serialising the record sequence.
#[derive(Debug)]
pub enum RenderError {
    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { source } => write!(f, "CSV render error: {source}"),
            Self::Json { source } => write!(f, "JSON render error: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<RenderError> for SiftError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

/// Convenience type alias for LogSift results.
pub type Result<T> = std::result::Result<T, SiftError>;
