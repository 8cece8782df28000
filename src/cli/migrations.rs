//! Organization migration report
//!
//! The list response can lag behind the actual job state, so each
//! migration is re-fetched individually. When the detail fetch fails the
//! listed record is kept and the failure counted as a skip.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{emit_rows, progress_bar};
use crate::cli::{CommandContext, ReportArgs};
use crate::client::GitHubApi;
use crate::error::Result;
use crate::models::MigrationRow;
use crate::output::Formattable;
use crate::report::ReportSummary;

/// Run the migrations report command.
pub async fn report(opts: &GlobalOptions, args: &ReportArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let migrations = ctx.client.list_org_migrations(org).await?;
    debug!("Fetched {} migrations", migrations.len());

    let mut summary = ReportSummary::new();
    let mut rows = Vec::new();
    let mut by_state: BTreeMap<String, usize> = BTreeMap::new();

    let bar = progress_bar(migrations.len() as u64, "migrations");
    for migration in &migrations {
        let current = match ctx.client.get_migration(org, migration.id).await {
            Ok(detail) => detail,
            Err(err) => {
                warn!(
                    "Using listed state for migration {}: {}",
                    migration.id, err
                );
                summary.skip();
                migration.clone()
            }
        };

        *by_state.entry(current.state.clone()).or_default() += 1;
        rows.push(MigrationRow::from(&current));
        bar.inc(1);
    }
    bar.finish_and_clear();

    for (state, count) in &by_state {
        summary.note(format!("{} {}", count, state));
    }

    emit_rows(rows, args, ctx.format, &mut summary)?;
    info!("migrations report: {}", summary);

    Ok(())
}

/// Run the migrations status command for a single migration.
pub async fn status(opts: &GlobalOptions, id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let migration = ctx.client.get_migration(org, id).await?;
    info!("Migration {} is {}", migration.id, migration.state);

    let rows = vec![MigrationRow::from(&migration)];
    rows.print(ctx.format)?;

    Ok(())
}
