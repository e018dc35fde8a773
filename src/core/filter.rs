// LogSift - core/filter.rs
//
// Per-run filter: an optional date range plus an optional regex, built
// once from the CLI arguments and AND-combined per line.
// Core layer: pure logic, no I/O or CLI dependencies.

use crate::core::extract;
use crate::core::model::{Record, TimestampOutcome};
use crate::util::constants;
use crate::util::error::FilterError;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

// =============================================================================
// DateRange
// =============================================================================

/// Inclusive-start / exclusive-end instant interval.
///
/// The end bound is midnight of the day AFTER the user's end date, so the
/// whole end-date calendar day is included. Either bound may be absent.
#[derive(Debug, Clone, Default)]
pub struct DateRange {
    /// Inclusive lower bound (midnight of the start date). None = unbounded.
    pub start: Option<NaiveDateTime>,

    /// Exclusive upper bound (midnight of the day after the end date).
    /// None = unbounded.
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    /// Build the range from the user-supplied calendar dates.
    ///
    /// Fails only when the day after `end` is unrepresentable.
    pub fn from_dates(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, FilterError> {
        let end = match end {
            Some(date) => Some(date.succ_opt().ok_or_else(|| FilterError::DateOutOfRange {
                value: date.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            start: start.and_then(|d| d.and_hms_opt(0, 0, 0)),
            end: end.and_then(|d| d.and_hms_opt(0, 0, 0)),
        })
    }

    /// Returns true when at least one bound is configured.
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Returns true when `instant` falls inside the range
    /// (start <= instant < end, with absent bounds always satisfied).
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        if let Some(start) = self.start {
            if instant < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if instant >= end {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// FilterSpec
// =============================================================================

/// The composed filter for one run. Built once before any line is read;
/// immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Date-range bounds. Inactive when both bounds are absent.
    pub range: DateRange,

    /// Compiled regex applied to the raw line text. None = no pattern filter.
    pub pattern: Option<Regex>,
}

impl FilterSpec {
    /// Build the filter from raw CLI argument strings.
    ///
    /// Any invalid input here is a fatal configuration error, surfaced
    /// before line processing begins.
    pub fn from_args(
        pattern: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, FilterError> {
        let pattern = match pattern {
            Some(p) => Some(compile_pattern(p)?),
            None => None,
        };

        let start = start_date.map(parse_date).transpose()?;
        let end = end_date.map(parse_date).transpose()?;

        Ok(Self {
            range: DateRange::from_dates(start, end)?,
            pattern,
        })
    }

    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        !self.range.is_active() && self.pattern.is_none()
    }
}

/// Compile the user-supplied pattern, enforcing the length bound.
fn compile_pattern(pattern: &str) -> Result<Regex, FilterError> {
    if pattern.len() > constants::MAX_REGEX_PATTERN_LENGTH {
        return Err(FilterError::PatternTooLong {
            length: pattern.len(),
            max_length: constants::MAX_REGEX_PATTERN_LENGTH,
        });
    }
    Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

/// Parse a `YYYY-MM-DD` CLI date argument.
fn parse_date(value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value, constants::DATE_FORMAT).map_err(|e| {
        FilterError::InvalidDate {
            value: value.to_string(),
            source: e,
        }
    })
}

// =============================================================================
// Classification pass
// =============================================================================

/// Run the classification pipeline over the full input, in input order.
///
/// One pass, line at a time. Timestamp extraction runs for every line
/// (the range test needs the instant); the level is extracted only for
/// survivors. Exclusion happens before a `Record` is created, so records
/// are never mutated or removed afterwards.
pub fn apply_filter(content: &str, spec: &FilterSpec) -> Vec<Record> {
    let mut records = Vec::new();
    let mut lines_processed: u64 = 0;

    for line in content.lines() {
        lines_processed += 1;

        let timestamp = extract::extract_timestamp(line);
        if !line_passes(line, &timestamp, spec) {
            continue;
        }

        records.push(Record {
            timestamp: timestamp.raw_text().to_string(),
            level: extract::extract_level(line),
            line: line.to_string(),
        });
    }

    tracing::debug!(
        lines = lines_processed,
        records = records.len(),
        "Classification pass complete"
    );

    records
}

// =============================================================================
// Per-line decision
// =============================================================================

/// Decide whether a line survives the filter.
///
/// Tests apply in fixed order, short-circuiting:
///   1. Date-range test, only when a bound is configured. A line without a
///      usable instant (missing or unparseable timestamp) can never satisfy
///      an active range.
///   2. Pattern test against the raw line text.
pub fn line_passes(line: &str, timestamp: &TimestampOutcome, spec: &FilterSpec) -> bool {
    if spec.range.is_active() {
        match timestamp.instant() {
            Some(instant) => {
                if !spec.range.contains(instant) {
                    return false;
                }
            }
            None => return false,
        }
    }

    if let Some(ref pattern) = spec.pattern {
        if !pattern.is_match(line) {
            return false;
        }
    }

    true
}
