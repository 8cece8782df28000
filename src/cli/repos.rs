//! Repository inventory report

use log::{debug, info};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::emit_rows;
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::RepoRow;
use crate::report::ReportSummary;

/// Run the repos report command.
pub async fn report(opts: &GlobalOptions, args: &ReportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    debug!("Fetching repositories for org {}", org);
    let repos = ctx.client.list_org_repos(org).await?;
    debug!("Fetched {} repositories", repos.len());

    let private = repos.iter().filter(|r| r.private).count();
    let archived = repos.iter().filter(|r| r.archived).count();
    let total_kb: u64 = repos.iter().map(|r| r.size).sum();

    let rows: Vec<RepoRow> = repos.into_iter().map(RepoRow::from).collect();

    let mut summary = ReportSummary::new();
    summary.note(format!("{} private", private));
    summary.note(format!("{} archived", archived));
    summary.note(format!("{} KB on disk", total_kb));

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("repos report: {}", summary);

    Ok(())
}
