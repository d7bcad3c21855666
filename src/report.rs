//! Non-interactive output for `--print`.
//!
//! Renders the visible results of a navigation state as plain text blocks
//! or JSON and writes them to any `io::Write`.

use crate::model::{Column, Record};
use crate::state::{visible_results, NavigationState};
use crate::store::RecordStore;
use std::io::{self, Write};

/// Printed instead of an empty list.
pub const NO_RESULTS_LINE: &str = "No results.";

/// Output format for `--print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Render records as text blocks, one per material, blank fields omitted.
pub fn render_text(navigation: &NavigationState, records: &[&Record]) -> String {
    if records.is_empty() {
        return format!("{NO_RESULTS_LINE}\n");
    }

    let noun = if records.len() == 1 { "result" } else { "results" };
    let mut out = format!("{}: {} {noun}\n", navigation.breadcrumb(), records.len());

    for record in records {
        out.push('\n');
        out.push_str(record.title());
        out.push('\n');
        for column in Column::ALL.into_iter().skip(1) {
            let value = record.field(column);
            if !value.trim().is_empty() {
                out.push_str(&format!("  {}: {}\n", column.label(), value.trim()));
            }
        }
        let tags = record.tags();
        if !tags.is_empty() {
            out.push_str(&format!("  Tags: {}\n", tags.join(", ")));
        }
    }

    out
}

/// Render records as a pretty-printed JSON array.
pub fn render_json(records: &[&Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Write the visible results for `navigation` to `out`.
///
/// # Errors
///
/// Propagates write failures; JSON errors surface as `io::Error`.
pub fn write_report<W: Write>(
    out: &mut W,
    store: &RecordStore,
    navigation: &NavigationState,
    format: ReportFormat,
) -> io::Result<()> {
    let records = visible_results(navigation, store.records());
    match format {
        ReportFormat::Text => out.write_all(render_text(navigation, &records).as_bytes())?,
        ReportFormat::Json => {
            let json = render_json(&records).map_err(io::Error::from)?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()
}
