//! Package details report
//!
//! Packages come from the GraphQL API; the client walks the connection
//! cursor until `hasNextPage` is false.

use log::{debug, info};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::emit_rows;
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::{PackageRow, format_bytes};
use crate::report::ReportSummary;

/// Run the packages report command.
pub async fn report(opts: &GlobalOptions, args: &ReportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let packages = ctx.client.list_org_packages(org).await?;
    debug!("Fetched {} packages", packages.len());

    let total_bytes: u64 = packages.iter().map(|p| p.total_bytes()).sum();
    let total_versions: u64 = packages.iter().map(|p| p.versions.total_count).sum();

    let rows: Vec<PackageRow> = packages.iter().map(PackageRow::from).collect();

    let mut summary = ReportSummary::new();
    summary.note(format!("{} versions", total_versions));
    summary.note(format!("total size {}", format_bytes(total_bytes)));

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("packages report: {}", summary);

    Ok(())
}
