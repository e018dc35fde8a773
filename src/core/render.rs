// LogSift - core/render.rs
//
// One-shot rendering of the record sequence to text, JSON, or CSV.
// Core layer: produces a single String, never writes incrementally.

use crate::core::model::Record;
use crate::util::error::RenderError;
use std::str::FromStr;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw lines, newline-joined.
    #[default]
    Text,

    /// Pretty-printed JSON array of {timestamp, level, line} objects.
    Json,

    /// Header row plus one CSV row per record.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown output format '{other}' (expected text, json, or csv)"
            )),
        }
    }
}

/// Render the full record sequence in the requested format.
///
/// Pure and idempotent: the same sequence renders to byte-identical
/// output. An empty sequence yields an empty string (text), `[]` (json),
/// or just the header row (csv).
pub fn render(records: &[Record], format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => render_json(records),
        OutputFormat::Csv => render_csv(records),
    }
}

/// Join the original lines with a newline separator, in order.
fn render_text(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.line.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json(records: &[Record]) -> Result<String, RenderError> {
    serde_json::to_string_pretty(records).map_err(|e| RenderError::Json { source: e })
}

/// Header row `timestamp,level,line`, then one row per record. The csv
/// crate applies standard quoting to fields containing the delimiter,
/// quote character, or line breaks.
fn render_csv(records: &[Record]) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);

        writer
            .write_record(["timestamp", "level", "line"])
            .map_err(|e| RenderError::Csv { source: e })?;

        for record in records {
            writer
                .write_record([&record.timestamp, &record.level, &record.line])
                .map_err(|e| RenderError::Csv { source: e })?;
        }

        writer.flush().map_err(|e| RenderError::Csv {
            source: csv::Error::from(e),
        })?;
    }

    // Records are built from &str, so the buffer is valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
