//! Run summary counters

use std::fmt;

/// Counters accumulated over one report run.
///
/// `rows` must equal the number of successfully processed items; per-item
/// failures bump `skipped` instead of aborting the run.
#[derive(Debug, Default)]
pub struct ReportSummary {
    /// Output rows produced
    pub rows: usize,

    /// Items skipped after a per-item error
    pub skipped: usize,

    /// Extra accumulated totals, one phrase each ("total asset size 1.2 GiB")
    pub notes: Vec<String>,
}

impl ReportSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one skipped item.
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Attach an accumulated total to the summary line.
    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows", self.rows)?;
        if self.skipped > 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        for note in &self.notes {
            write!(f, ", {}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_plain() {
        let summary = ReportSummary {
            rows: 12,
            ..Default::default()
        };
        assert_eq!(summary.to_string(), "12 rows");
    }

    #[test]
    fn test_summary_with_skips_and_notes() {
        let mut summary = ReportSummary::new();
        summary.rows = 40;
        summary.skip();
        summary.skip();
        summary.note("total asset size 1.5 GiB");

        assert_eq!(
            summary.to_string(),
            "40 rows, 2 skipped, total asset size 1.5 GiB"
        );
    }
}
