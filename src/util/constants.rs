// LogSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSift";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Extraction patterns
// =============================================================================

/// Timestamp pattern: fixed-width ISO date-time with a literal 'T' and no
/// fractional seconds or timezone. Only the first match in a line counts.
pub const TIMESTAMP_PATTERN: &str = r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}";

/// chrono format string matching `TIMESTAMP_PATTERN` exactly.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Severity level pattern: standalone-word occurrence of a known level
/// token, matched case-insensitively.
pub const LEVEL_PATTERN: &str = r"(?i)\b(DEBUG|INFO|WARNING|ERROR|CRITICAL)\b";

/// chrono format string for the CLI `--start-date` / `--end-date` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Filter limits
// =============================================================================

/// Maximum user-supplied regex pattern length to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4_096;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
