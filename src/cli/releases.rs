//! Release asset size report
//!
//! Walks every repository in the organization, sums release asset sizes,
//! and flags repositories exceeding the configured threshold. Repositories
//! whose release listing fails are skipped with a warning; the rest of the
//! run continues.

use log::{debug, info, warn};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{emit_rows, progress_bar};
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::{ReleaseRow, format_bytes};
use crate::report::ReportSummary;

/// Run the releases report command.
pub async fn report(
    opts: &GlobalOptions,
    args: &ReportArgs,
    threshold_mb: Option<u64>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let threshold_bytes = threshold_bytes(threshold_mb);

    let repos = ctx.client.list_org_repos(org).await?;
    debug!("Scanning releases across {} repositories", repos.len());

    let mut summary = ReportSummary::new();
    let mut rows = Vec::new();
    let mut total_bytes = 0u64;

    let bar = progress_bar(repos.len() as u64, "releases");
    for repo in &repos {
        match ctx.client.list_releases(org, &repo.name).await {
            Ok(releases) => {
                let row = ReleaseRow::from_releases(&repo.name, &releases, threshold_bytes);
                total_bytes += row.total_bytes;
                rows.push(row);
            }
            Err(err) => {
                warn!("Skipping {}: {}", repo.name, err);
                summary.skip();
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let over = rows.iter().filter(|r| !r.over_threshold.is_empty()).count();
    summary.note(format!("total asset size {}", format_bytes(total_bytes)));
    if threshold_bytes.is_some() {
        summary.note(format!("{} over threshold", over));
    }

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("releases report: {}", summary);

    Ok(())
}

/// Convert a megabyte threshold to bytes, saturating on overflow.
fn threshold_bytes(threshold_mb: Option<u64>) -> Option<u64> {
    threshold_mb.map(|mb| mb.saturating_mul(1024 * 1024))
}
