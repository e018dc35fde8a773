// LogSift - core/extract.rs
//
// Fixed-pattern extraction of timestamps and severity levels from raw
// log lines. Core layer: pure text processing, no I/O.
//
// Both patterns are process-wide statics compiled once; extraction runs
// per line and must never recompile.

use crate::core::model::TimestampOutcome;
use crate::util::constants;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

static TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();
static LEVEL_RE: OnceLock<Regex> = OnceLock::new();

/// The compiled timestamp pattern (`YYYY-MM-DDTHH:MM:SS`, fixed width).
///
/// The pattern source is a vetted constant; compilation failure would be a
/// build defect, covered by the unit tests below.
fn timestamp_re() -> &'static Regex {
    TIMESTAMP_RE.get_or_init(|| {
        Regex::new(constants::TIMESTAMP_PATTERN).expect("timestamp pattern: invalid regex")
    })
}

/// The compiled severity pattern (word-boundary level token, case-insensitive).
fn level_re() -> &'static Regex {
    LEVEL_RE
        .get_or_init(|| Regex::new(constants::LEVEL_PATTERN).expect("level pattern: invalid regex"))
}

/// Extract the first timestamp-shaped substring from `line` and attempt to
/// parse it into a calendar instant.
///
/// Only the first match in the line counts. A match that chrono rejects
/// (e.g. `2024-13-01T00:00:00`) yields `Unparseable`: the raw text is kept
/// for the output record, but no instant is available for range filtering.
pub fn extract_timestamp(line: &str) -> TimestampOutcome {
    let Some(m) = timestamp_re().find(line) else {
        return TimestampOutcome::Missing;
    };

    let raw = m.as_str().to_string();
    match NaiveDateTime::parse_from_str(&raw, constants::TIMESTAMP_FORMAT) {
        Ok(instant) => TimestampOutcome::Valid { raw, instant },
        Err(_) => TimestampOutcome::Unparseable { raw },
    }
}

/// Extract the first standalone severity token from `line`.
///
/// Matching is case-insensitive; the result is always upper-cased.
/// Returns "" when the line carries no recognised level — not an error.
pub fn extract_level(line: &str) -> String {
    level_re()
        .find(line)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    // -------------------------------------------------------------------------
    // Timestamp extraction
    // -------------------------------------------------------------------------

    #[test]
    fn test_extract_timestamp_valid() {
        let outcome = extract_timestamp("2025-05-01T10:00:00 INFO Starting process");
        assert_eq!(outcome.raw_text(), "2025-05-01T10:00:00");
        let instant = outcome.instant().expect("valid timestamp should parse");
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(instant.hour(), 10);
    }

    #[test]
    fn test_extract_timestamp_first_match_wins() {
        let outcome =
            extract_timestamp("2025-05-01T10:00:00 retry of 2025-05-02T11:00:00 succeeded");
        assert_eq!(outcome.raw_text(), "2025-05-01T10:00:00");
    }

    #[test]
    fn test_extract_timestamp_mid_line() {
        let outcome = extract_timestamp("worker[3]: at 2025-05-01T10:00:00 job started");
        assert_eq!(outcome.raw_text(), "2025-05-01T10:00:00");
        assert!(outcome.instant().is_some());
    }

    #[test]
    fn test_extract_timestamp_missing() {
        let outcome = extract_timestamp("no timestamp on this line");
        assert_eq!(outcome, TimestampOutcome::Missing);
        assert_eq!(outcome.raw_text(), "");
        assert!(outcome.instant().is_none());
    }

    /// Syntactically matching but semantically invalid: the raw text is
    /// preserved, the instant is not.
    #[test]
    fn test_extract_timestamp_unparseable_keeps_raw() {
        let outcome = extract_timestamp("2024-13-01T00:00:00 ERROR month 13");
        assert_eq!(outcome.raw_text(), "2024-13-01T00:00:00");
        assert!(outcome.instant().is_none());
        assert!(matches!(outcome, TimestampOutcome::Unparseable { .. }));
    }

    #[test]
    fn test_extract_timestamp_rejects_invalid_time_of_day() {
        let outcome = extract_timestamp("2024-01-01T25:61:61 bad clock");
        assert!(matches!(outcome, TimestampOutcome::Unparseable { .. }));
    }

    /// Date-only or space-separated forms are not the supported shape.
    #[test]
    fn test_extract_timestamp_requires_t_separator() {
        assert_eq!(
            extract_timestamp("2025-05-01 10:00:00 spaced"),
            TimestampOutcome::Missing
        );
        assert_eq!(extract_timestamp("2025-05-01 only"), TimestampOutcome::Missing);
    }

    // -------------------------------------------------------------------------
    // Level extraction
    // -------------------------------------------------------------------------

    #[test]
    fn test_extract_level_known_tokens() {
        for token in ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"] {
            let line = format!("2025-05-01T10:00:00 {token} message");
            assert_eq!(extract_level(&line), token);
        }
    }

    /// Any case mixture normalises to upper-case.
    #[test]
    fn test_extract_level_case_insensitive() {
        assert_eq!(extract_level("warning: disk almost full"), "WARNING");
        assert_eq!(extract_level("Error while connecting"), "ERROR");
        assert_eq!(extract_level("cRiTiCaL failure"), "CRITICAL");
    }

    #[test]
    fn test_extract_level_first_match_wins() {
        assert_eq!(extract_level("INFO before ERROR"), "INFO");
    }

    /// Tokens embedded in larger words are not levels.
    #[test]
    fn test_extract_level_word_boundary() {
        assert_eq!(extract_level("INFORMATION only"), "");
        assert_eq!(extract_level("DEBUGGING session"), "");
        assert_eq!(extract_level("no level here"), "");
    }
}
