//! Shared report command plumbing
//!
//! Every report command follows the same tail: apply the row limit, write
//! the requested files or print to stdout, and record the row count in the
//! run summary.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{OutputFormat, ReportArgs};
use crate::error::Result;
use crate::output::Formattable;
use crate::report::{ReportSummary, write_csv, write_markdown};

/// Emit report rows according to the output arguments.
///
/// Writes CSV and/or Markdown when paths were given; otherwise prints to
/// stdout in the selected format. Sets `summary.rows` to the emitted count.
pub fn emit_rows<T: Tabled + Serialize>(
    rows: Vec<T>,
    args: &ReportArgs,
    format: OutputFormat,
    summary: &mut ReportSummary,
) -> Result<()> {
    let rows: Vec<T> = match args.limit {
        Some(limit) => rows.into_iter().take(limit).collect(),
        None => rows,
    };
    summary.rows = rows.len();

    if let Some(ref path) = args.output {
        let written = write_csv(path, &rows)?;
        info!("Wrote {} CSV rows to {}", written, path.display());
    }
    if let Some(ref path) = args.markdown {
        write_markdown(path, &rows)?;
        info!("Wrote Markdown report to {}", path.display());
    }

    if !args.writes_files() {
        rows.print(format)?;
    }

    Ok(())
}

/// Progress bar for per-repository loops. Draws on stderr; invisible when
/// stderr is not a terminal.
pub fn progress_bar(len: u64, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(ProgressStyle::default_bar());
    bar.set_message(label.to_string());
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Tabled)]
    struct Row {
        name: String,
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                name: format!("row-{}", i),
            })
            .collect()
    }

    #[test]
    fn test_emit_rows_writes_csv_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let args = ReportArgs {
            output: Some(path.clone()),
            ..Default::default()
        };
        let mut summary = ReportSummary::new();

        emit_rows(rows(3), &args, OutputFormat::Table, &mut summary).unwrap();

        assert_eq!(summary.rows, 3);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4); // header + 3
    }

    #[test]
    fn test_emit_rows_applies_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let args = ReportArgs {
            output: Some(path.clone()),
            limit: Some(2),
            ..Default::default()
        };
        let mut summary = ReportSummary::new();

        emit_rows(rows(5), &args, OutputFormat::Table, &mut summary).unwrap();

        assert_eq!(summary.rows, 2);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_emit_rows_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        let args = ReportArgs {
            markdown: Some(path.clone()),
            ..Default::default()
        };
        let mut summary = ReportSummary::new();

        emit_rows(rows(1), &args, OutputFormat::Table, &mut summary).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("row-0"));
    }
}
