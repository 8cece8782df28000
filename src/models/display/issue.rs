//! Issue report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{display_opt, truncate_string};
use crate::client::models::Issue;

/// One row per issue in the issue report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct IssueRow {
    /// Repository name
    #[tabled(rename = "REPO")]
    pub repo: String,

    /// Issue number
    #[tabled(rename = "#")]
    pub number: u64,

    /// State (open, closed)
    #[tabled(rename = "STATE")]
    pub state: String,

    /// Title, truncated for table output
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Author login
    #[tabled(rename = "AUTHOR")]
    pub author: String,

    /// Labels, comma-separated
    #[tabled(rename = "LABELS")]
    pub labels: String,

    /// Comment count
    #[tabled(rename = "COMMENTS")]
    pub comments: u64,

    /// Creation time
    #[tabled(rename = "CREATED")]
    pub created_at: String,
}

impl IssueRow {
    /// Build a row for an issue of the given repository.
    pub fn new(repo: &str, issue: &Issue) -> Self {
        let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();

        Self {
            repo: repo.to_string(),
            number: issue.number,
            state: issue.state.clone(),
            title: truncate_string(&issue.title, 60),
            author: display_opt(issue.user.as_ref().map(|u| u.login.as_str())),
            labels: labels.join(","),
            comments: issue.comments,
            created_at: display_opt(issue.created_at.as_deref()),
        }
    }
}
