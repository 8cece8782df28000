//! Codespace usage report row

use serde::Serialize;
use tabled::Tabled;

use super::common::display_opt;
use crate::client::models::Codespace;

/// One row per codespace in the usage report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CodespaceRow {
    /// Codespace name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Owning user
    #[tabled(rename = "OWNER")]
    pub owner: String,

    /// Source repository (owner/name)
    #[tabled(rename = "REPO")]
    pub repository: String,

    /// Machine type
    #[tabled(rename = "MACHINE")]
    pub machine: String,

    /// Current state
    #[tabled(rename = "STATE")]
    pub state: String,

    /// Last connection time
    #[tabled(rename = "LAST USED")]
    pub last_used_at: String,
}

impl From<&Codespace> for CodespaceRow {
    fn from(cs: &Codespace) -> Self {
        Self {
            name: cs.name.clone(),
            owner: display_opt(cs.owner.as_ref().map(|o| o.login.as_str())),
            repository: display_opt(cs.repository.as_ref().map(|r| r.name_with_owner.as_str())),
            machine: display_opt(
                cs.machine
                    .as_ref()
                    .and_then(|m| m.display_name.as_deref()),
            ),
            state: display_opt(cs.state.as_deref()),
            last_used_at: display_opt(cs.last_used_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codespace_row() {
        let body = r#"{
            "name": "fuzzy-spork",
            "state": "Shutdown",
            "lastUsedAt": "2025-05-20T17:45:00Z",
            "owner": {"login": "alice"},
            "repository": {"nameWithOwner": "acme/api"},
            "machine": {"displayName": "4 cores, 16 GB RAM"}
        }"#;
        let cs: Codespace = serde_json::from_str(body).unwrap();

        let row = CodespaceRow::from(&cs);
        assert_eq!(row.owner, "alice");
        assert_eq!(row.repository, "acme/api");
        assert_eq!(row.machine, "4 cores, 16 GB RAM");
        assert_eq!(row.state, "Shutdown");
    }

    #[test]
    fn test_codespace_row_sparse() {
        let cs: Codespace = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();

        let row = CodespaceRow::from(&cs);
        assert_eq!(row.owner, "--");
        assert_eq!(row.machine, "--");
        assert_eq!(row.last_used_at, "--");
    }
}
