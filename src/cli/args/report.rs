//! Shared report output arguments

use std::path::PathBuf;

use clap::Args;

/// Output arguments shared by every report command.
///
/// Flatten this into any report command:
/// ```ignore
/// Report {
///     #[command(flatten)]
///     report: ReportArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct ReportArgs {
    /// Write rows as CSV to this path
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write rows as a Markdown table to this path
    #[arg(long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,

    /// Maximum rows to emit
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl ReportArgs {
    /// Whether any file output was requested.
    pub fn writes_files(&self) -> bool {
        self.output.is_some() || self.markdown.is_some()
    }
}
