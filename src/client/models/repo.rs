//! Repository resource models

use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /orgs/{org}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// owner/name form
    #[serde(default)]
    pub full_name: Option<String>,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// Whether the repository is archived
    #[serde(default)]
    pub archived: bool,

    /// Whether the repository is a fork
    #[serde(default)]
    pub fork: bool,

    /// Visibility (public, private, internal)
    #[serde(default)]
    pub visibility: Option<String>,

    /// Disk size in kilobytes
    #[serde(default)]
    pub size: u64,

    /// Default branch name
    #[serde(default)]
    pub default_branch: Option<String>,

    /// Time of the most recent push
    #[serde(default)]
    pub pushed_at: Option<String>,

    /// Open issue count (includes pull requests)
    #[serde(default)]
    pub open_issues_count: u64,
}

/// The authenticated user, from `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account login
    pub login: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// An organization membership summary, from `GET /user/orgs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgSummary {
    /// Organization login
    pub login: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserializes_sparse_payload() {
        let body = r#"{"name": "tools", "size": 2048}"#;
        let repo: Repository = serde_json::from_str(body).unwrap();
        assert_eq!(repo.name, "tools");
        assert_eq!(repo.size, 2048);
        assert!(!repo.private);
        assert!(!repo.archived);
        assert!(repo.visibility.is_none());
    }

    #[test]
    fn test_repository_full_payload() {
        let body = r#"{
            "name": "api",
            "full_name": "acme/api",
            "private": true,
            "archived": false,
            "fork": false,
            "visibility": "private",
            "size": 512,
            "default_branch": "main",
            "pushed_at": "2025-06-01T12:00:00Z",
            "open_issues_count": 4
        }"#;
        let repo: Repository = serde_json::from_str(body).unwrap();
        assert_eq!(repo.full_name.as_deref(), Some("acme/api"));
        assert!(repo.private);
        assert_eq!(repo.open_issues_count, 4);
    }
}
