//! Serializes classified records into the reference wire text.
//!
//! One record per line: `<text, pos>` for literals and `<TS[index], pos>`
//! for symbol references, joined by newlines with no trailing newline.

use std::fmt::Write as _;

use crate::classifier::Record;

/// Format a record sequence into the newline-joined wire text.
#[must_use]
pub fn format(records: &[Record]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{record}");
    }
    out
}
