//! Rendering expanded rows for sinks.
//!
//! Output rows go to a clipboard or a file as tab-separated text, the format
//! spreadsheets paste natively. The sink is agnostic to how the rows were
//! produced.

use crate::expand::OutputRow;
use crate::schema;

/// Render rows as tab-separated lines, optionally preceded by the fixed
/// 25-column header.
pub fn tsv(rows: &[OutputRow], with_header: bool) -> String {
    let mut out = String::new();
    if with_header {
        out.push_str(&schema::COLUMN_HEADERS.join("\t"));
        out.push('\n');
    }
    for row in rows {
        out.push_str(&row.cells().join("\t"));
        out.push('\n');
    }
    out
}
