//! Codespace models for the GraphQL codespaces connection

use serde::Deserialize;

use crate::client::graphql::PageInfo;

/// Top-level data shape for the codespaces query.
#[derive(Debug, Deserialize)]
pub struct CodespacesData {
    /// The queried organization, absent if not visible to the token
    pub organization: Option<CodespacesOrganization>,
}

/// Organization wrapper holding the codespaces connection.
#[derive(Debug, Deserialize)]
pub struct CodespacesOrganization {
    /// One page of the codespaces connection
    pub codespaces: CodespaceConnection,
}

/// A page of codespaces.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodespaceConnection {
    /// Total codespace count across all pages
    #[serde(default)]
    pub total_count: u64,

    /// Codespaces on this page
    #[serde(default)]
    pub nodes: Vec<Codespace>,

    /// Cursor state for the next request
    #[serde(default)]
    pub page_info: PageInfo,
}

/// A single codespace instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Codespace {
    /// Codespace name (unique slug)
    pub name: String,

    /// Current state (Available, Shutdown, ...)
    #[serde(default)]
    pub state: Option<String>,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last connection time
    #[serde(default)]
    pub last_used_at: Option<String>,

    /// Owning user
    #[serde(default)]
    pub owner: Option<CodespaceOwner>,

    /// Repository the codespace was created from
    #[serde(default)]
    pub repository: Option<CodespaceRepository>,

    /// Machine type backing the instance
    #[serde(default)]
    pub machine: Option<CodespaceMachine>,
}

/// Owner reference on a codespace.
#[derive(Debug, Clone, Deserialize)]
pub struct CodespaceOwner {
    /// Account login
    pub login: String,
}

/// Repository reference on a codespace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodespaceRepository {
    /// owner/name form
    pub name_with_owner: String,
}

/// Machine type reference on a codespace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodespaceMachine {
    /// Human-readable machine description
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codespaces_page_parses() {
        let body = r#"{
            "organization": {
                "codespaces": {
                    "totalCount": 12,
                    "nodes": [
                        {
                            "name": "fuzzy-spork-abc123",
                            "state": "Shutdown",
                            "createdAt": "2025-05-01T08:00:00Z",
                            "lastUsedAt": "2025-05-20T17:45:00Z",
                            "owner": {"login": "alice"},
                            "repository": {"nameWithOwner": "acme/api"},
                            "machine": {"displayName": "4 cores, 16 GB RAM"}
                        }
                    ],
                    "pageInfo": {"hasNextPage": false, "endCursor": null}
                }
            }
        }"#;
        let data: CodespacesData = serde_json::from_str(body).unwrap();
        let conn = data.organization.unwrap().codespaces;
        assert_eq!(conn.total_count, 12);
        assert!(!conn.page_info.has_next_page);

        let cs = &conn.nodes[0];
        assert_eq!(cs.owner.as_ref().unwrap().login, "alice");
        assert_eq!(
            cs.machine.as_ref().unwrap().display_name.as_deref(),
            Some("4 cores, 16 GB RAM")
        );
    }

    #[test]
    fn test_codespace_minimal() {
        let cs: Codespace = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();
        assert!(cs.owner.is_none());
        assert!(cs.last_used_at.is_none());
    }
}
