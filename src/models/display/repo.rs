//! Repository report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{checkmark, display_opt};
use crate::client::models::Repository;

/// One row of the repository inventory report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoRow {
    /// Repository name
    #[tabled(rename = "REPO")]
    pub name: String,

    /// Visibility (public, private, internal)
    #[tabled(rename = "VISIBILITY")]
    pub visibility: String,

    /// Archived marker
    #[tabled(rename = "ARCHIVED")]
    pub archived: String,

    /// Fork marker
    #[tabled(rename = "FORK")]
    pub fork: String,

    /// Disk size in kilobytes
    #[tabled(rename = "SIZE_KB")]
    pub size_kb: u64,

    /// Open issue count
    #[tabled(rename = "ISSUES")]
    pub open_issues: u64,

    /// Last push time
    #[tabled(rename = "PUSHED")]
    pub pushed_at: String,
}

impl From<Repository> for RepoRow {
    fn from(repo: Repository) -> Self {
        let visibility = repo
            .visibility
            .unwrap_or_else(|| if repo.private { "private" } else { "public" }.to_string());

        Self {
            name: repo.name,
            visibility,
            archived: checkmark(repo.archived),
            fork: checkmark(repo.fork),
            size_kb: repo.size,
            open_issues: repo.open_issues_count,
            pushed_at: display_opt(repo.pushed_at.as_deref()),
        }
    }
}
