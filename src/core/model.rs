// LogSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no CLI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Record (normalised output of classification)
// =============================================================================

/// A single surviving log line plus its derived annotations.
///
/// This is the unit that flows from filtering into rendering. Field order
/// matters: serde emits JSON keys and CSV columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw matched timestamp substring, exactly as it appeared in the
    /// line. Empty if the line had no timestamp. Never reformatted.
    pub timestamp: String,

    /// Matched severity token, upper-cased. Empty if none was found.
    pub level: String,

    /// The original line with the trailing line terminator stripped.
    pub line: String,
}

// =============================================================================
// Timestamp outcome
// =============================================================================

/// Result of timestamp extraction for one line.
///
/// Three-valued so that "line had no timestamp" and "line had something
/// timestamp-shaped that is not a real calendar instant" stay distinct:
/// both are rejected by an active date filter, but only the latter keeps
/// its raw text in the output record.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampOutcome {
    /// No timestamp-shaped substring in the line.
    Missing,

    /// The pattern matched but the value is not a valid instant
    /// (e.g. month 13). The raw text is preserved for the record.
    Unparseable { raw: String },

    /// The pattern matched and parsed into a calendar instant.
    Valid { raw: String, instant: NaiveDateTime },
}

impl TimestampOutcome {
    /// The raw matched substring, or "" when nothing matched.
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Missing => "",
            Self::Unparseable { raw } | Self::Valid { raw, .. } => raw,
        }
    }

    /// The parsed instant, available only for `Valid`.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Valid { instant, .. } => Some(*instant),
            _ => None,
        }
    }
}
