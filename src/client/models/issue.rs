//! Issue models

use serde::{Deserialize, Serialize};

/// An issue as returned by `GET /repos/{owner}/{repo}/issues`.
///
/// The issues endpoint also returns pull requests; they carry a
/// `pull_request` key and are filtered out by the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number (unique within the repository)
    pub number: u64,

    /// Issue title
    pub title: String,

    /// State (open, closed)
    pub state: String,

    /// Author
    #[serde(default)]
    pub user: Option<IssueAuthor>,

    /// Attached labels
    #[serde(default)]
    pub labels: Vec<IssueLabel>,

    /// Comment count
    #[serde(default)]
    pub comments: u64,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// Close time, if closed
    #[serde(default)]
    pub closed_at: Option<String>,

    /// Present when this record is actually a pull request
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// Whether this record is a pull request masquerading as an issue.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Issue author reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueAuthor {
    /// Account login
    pub login: String,
}

/// A label attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueLabel {
    /// Label name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_deserializes() {
        let body = r#"{
            "number": 42,
            "title": "Flaky upload",
            "state": "open",
            "user": {"login": "carol"},
            "labels": [{"name": "bug"}, {"name": "ci"}],
            "comments": 3,
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        let issue: Issue = serde_json::from_str(body).unwrap();
        assert_eq!(issue.number, 42);
        assert!(!issue.is_pull_request());
        assert_eq!(issue.labels.len(), 2);
    }

    #[test]
    fn test_pull_request_detected() {
        let body = r#"{
            "number": 7,
            "title": "Add retries",
            "state": "open",
            "pull_request": {"url": "https://api.github.com/repos/acme/api/pulls/7"}
        }"#;
        let issue: Issue = serde_json::from_str(body).unwrap();
        assert!(issue.is_pull_request());
    }
}
