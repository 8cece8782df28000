//! Migration report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{checkmark, display_opt};
use crate::client::models::Migration;

/// One row per migration in the migration report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MigrationRow {
    /// Migration ID
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Current state
    #[tabled(rename = "STATE")]
    pub state: String,

    /// Bundled repository count
    #[tabled(rename = "REPOS")]
    pub repositories: usize,

    /// Locked-repositories marker
    #[tabled(rename = "LOCKED")]
    pub locked: String,

    /// Creation time
    #[tabled(rename = "CREATED")]
    pub created_at: String,

    /// Last state change time
    #[tabled(rename = "UPDATED")]
    pub updated_at: String,
}

impl From<&Migration> for MigrationRow {
    fn from(migration: &Migration) -> Self {
        Self {
            id: migration.id,
            state: migration.state.clone(),
            repositories: migration.repositories.len(),
            locked: checkmark(migration.lock_repositories),
            created_at: display_opt(migration.created_at.as_deref()),
            updated_at: display_opt(migration.updated_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::MigrationRepository;

    #[test]
    fn test_migration_row() {
        let migration = Migration {
            id: 79,
            guid: None,
            state: "exporting".to_string(),
            lock_repositories: true,
            created_at: Some("2025-01-01T00:00:00Z".to_string()),
            updated_at: None,
            repositories: vec![
                MigrationRepository {
                    full_name: "acme/api".to_string(),
                },
                MigrationRepository {
                    full_name: "acme/web".to_string(),
                },
            ],
        };

        let row = MigrationRow::from(&migration);
        assert_eq!(row.id, 79);
        assert_eq!(row.state, "exporting");
        assert_eq!(row.repositories, 2);
        assert_eq!(row.locked, "\u{2713}");
        assert_eq!(row.updated_at, "--");
    }
}
