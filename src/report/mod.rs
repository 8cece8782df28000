//! Report file emission and run summaries
//!
//! Every report command funnels its rows through this module: CSV via the
//! `csv` crate, Markdown through the shared table renderer, and a
//! `ReportSummary` accumulated while the command runs.

mod summary;
mod writer;

pub use summary::ReportSummary;
pub use writer::{write_csv, write_markdown};
