//! Rendering of findings for stdout.

use anyhow::{Context, Result};
use apilint_core::Report;

/// Render every finding of a report.
///
/// Text mode prints one finding per line. JSON mode prints the findings as an
/// array of `{origin, location, message}` records.
pub fn render(report: &Report, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&report.records())
            .context("failed to serialize findings");
    }
    Ok(report
        .errors()
        .iter()
        .map(|e| format!("{e}\n"))
        .collect())
}

/// Print a report to stdout. Nothing is printed for an empty text report.
pub fn print_report(report: &Report, json: bool) -> Result<()> {
    let rendered = render(report, json)?;
    if json {
        println!("{rendered}");
    } else {
        print!("{rendered}");
    }
    Ok(())
}
