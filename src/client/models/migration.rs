//! Organization migration models

use serde::{Deserialize, Serialize};

/// A migration (export job) from `GET /orgs/{org}/migrations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Migration {
    /// Migration ID
    pub id: u64,

    /// Stable GUID for the migration archive
    #[serde(default)]
    pub guid: Option<String>,

    /// Current state (pending, exporting, exported, failed)
    pub state: String,

    /// Whether repositories are locked during the export
    #[serde(default)]
    pub lock_repositories: bool,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last state change time
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Repositories bundled into this migration
    #[serde(default)]
    pub repositories: Vec<MigrationRepository>,
}

/// A repository included in a migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationRepository {
    /// owner/name form
    pub full_name: String,
}
