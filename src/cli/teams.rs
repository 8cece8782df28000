//! Team membership report
//!
//! One secondary request per team for its member logins. A team whose
//! member listing fails is skipped entirely so the row count reflects
//! successfully processed teams.

use log::{debug, info, warn};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{emit_rows, progress_bar};
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::TeamRow;
use crate::report::ReportSummary;

/// Run the teams report command.
pub async fn report(opts: &GlobalOptions, args: &ReportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let teams = ctx.client.list_teams(org).await?;
    debug!("Fetched {} teams", teams.len());

    let mut summary = ReportSummary::new();
    let mut rows = Vec::new();
    let mut total_members = 0usize;

    let bar = progress_bar(teams.len() as u64, "teams");
    for team in &teams {
        match ctx.client.list_team_members(org, &team.slug).await {
            Ok(members) => {
                total_members += members.len();
                rows.push(TeamRow::new(team, &members));
            }
            Err(err) => {
                warn!("Skipping {}: {}", team.slug, err);
                summary.skip();
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    summary.note(format!("{} memberships", total_members));

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("teams report: {}", summary);

    Ok(())
}
