use std::io::{self, Write};

use anyhow::Context;
use cq_manifest::WorkspaceReport;

use crate::cli::OutputFormat;

/// Render the report to a string in the requested format.
///
/// The `lines` format carries no escaping: manifest values are trusted to
/// contain neither commas nor newlines.
pub fn render(report: &WorkspaceReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Lines => Ok(report.lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Print the report in the requested format.
pub fn output(report: &WorkspaceReport, format: OutputFormat) -> anyhow::Result<()> {
    write_report(&mut io::stdout().lock(), report, format)
}

/// Write the rendered report and a trailing newline, surfacing write errors
/// such as a closed pipe instead of panicking.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &WorkspaceReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    writeln!(writer, "{rendered}")
        .and_then(|()| writer.flush())
        .context("failed to write report to stdout")
}
