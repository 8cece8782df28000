//! Codespace usage report
//!
//! Codespaces come from the GraphQL API; the client walks the connection
//! cursor until `hasNextPage` is false.

use log::{debug, info};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::emit_rows;
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::CodespaceRow;
use crate::report::ReportSummary;

/// Run the codespaces report command.
pub async fn report(opts: &GlobalOptions, args: &ReportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let codespaces = ctx.client.list_org_codespaces(org).await?;
    debug!("Fetched {} codespaces", codespaces.len());

    let idle = codespaces
        .iter()
        .filter(|c| c.state.as_deref() == Some("Shutdown"))
        .count();

    let rows: Vec<CodespaceRow> = codespaces.iter().map(CodespaceRow::from).collect();

    let mut summary = ReportSummary::new();
    summary.note(format!("{} shut down", idle));

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("codespaces report: {}", summary);

    Ok(())
}
