//! CSV and Markdown report writers

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use crate::error::Result;
use crate::output::table::format_markdown;

/// Write rows as CSV with a header row. Returns the number of data rows.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Write rows as a Markdown table.
pub fn write_markdown<T: Tabled>(path: &Path, rows: &[T]) -> Result<()> {
    std::fs::write(path, format!("{}\n", format_markdown(rows)))?;
    Ok(())
}
