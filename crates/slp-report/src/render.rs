//! Parsing a log document and rendering its `LogicLog` as a report.

use crate::error::ReportResult;
use crate::types::{LineEnding, LogRecord};

/// Parse a JSON document into a `LogRecord`.
///
/// Unknown fields anywhere are ignored; a missing `LogicLog` is an empty one.
/// Only a `LogicLog` that is not a list of scalars is a parse error.
pub fn parse_record(text: &str) -> ReportResult<LogRecord> {
    Ok(serde_json::from_str(text)?)
}

/// Join entries with one blank line between each pair.
///
/// No separator is added before the first or after the last entry.
pub fn render_report<S: AsRef<str>>(entries: &[S], line_ending: LineEnding) -> String {
    let separator = line_ending.separator();
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(&separator);
        }
        out.push_str(entry.as_ref());
    }
    out
}
