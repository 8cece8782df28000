//! Issue report
//!
//! The REST issues endpoint also returns pull requests; those are
//! filtered out so the report covers issues only. With `--repo` the
//! report targets a single repository, otherwise every repository in
//! the organization.

use log::{debug, info, warn};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{emit_rows, progress_bar};
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::{Error, Result};
use crate::models::IssueRow;
use crate::report::ReportSummary;

/// Run the issues report command.
pub async fn report(
    opts: &GlobalOptions,
    args: &ReportArgs,
    state: &str,
    repo: Option<&str>,
) -> Result<()> {
    if !matches!(state, "open" | "closed" | "all") {
        return Err(Error::Other(format!(
            "Invalid state '{}', expected open, closed, or all",
            state
        )));
    }

    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let repo_names: Vec<String> = match repo {
        Some(name) => vec![name.to_string()],
        None => {
            let repos = ctx.client.list_org_repos(org).await?;
            debug!("Fetched {} repositories", repos.len());
            repos.into_iter().map(|r| r.name).collect()
        }
    };

    let mut summary = ReportSummary::new();
    let mut rows = Vec::new();
    let mut open = 0usize;
    let mut closed = 0usize;
    let mut pull_requests = 0usize;

    let bar = progress_bar(repo_names.len() as u64, "issues");
    for name in &repo_names {
        match ctx.client.list_issues(org, name, state).await {
            Ok(issues) => {
                for issue in &issues {
                    if issue.is_pull_request() {
                        pull_requests += 1;
                        continue;
                    }
                    match issue.state.as_str() {
                        "closed" => closed += 1,
                        _ => open += 1,
                    }
                    rows.push(IssueRow::new(name, issue));
                }
            }
            Err(err) => {
                warn!("Skipping {}: {}", name, err);
                summary.skip();
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    debug!("Filtered out {} pull requests", pull_requests);
    summary.note(format!("{} open", open));
    summary.note(format!("{} closed", closed));

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("issues report: {}", summary);

    Ok(())
}
