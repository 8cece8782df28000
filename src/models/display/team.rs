//! Team membership report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{display_opt, truncate_string};
use crate::client::models::{Team, TeamMember};

/// One row per team in the membership report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamRow {
    /// Team name
    #[tabled(rename = "TEAM")]
    pub name: String,

    /// Team slug
    #[tabled(rename = "SLUG")]
    pub slug: String,

    /// Privacy setting
    #[tabled(rename = "PRIVACY")]
    pub privacy: String,

    /// Member count
    #[tabled(rename = "MEMBERS")]
    pub members: usize,

    /// Member logins, comma-separated
    #[tabled(rename = "LOGINS")]
    pub member_logins: String,
}

impl TeamRow {
    /// Combine a team with its fetched members into a report row.
    pub fn new(team: &Team, members: &[TeamMember]) -> Self {
        let logins: Vec<&str> = members.iter().map(|m| m.login.as_str()).collect();

        Self {
            name: team.name.clone(),
            slug: team.slug.clone(),
            privacy: display_opt(team.privacy.as_deref()),
            members: members.len(),
            member_logins: truncate_string(&logins.join(","), 80),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: 5,
            name: "Platform".to_string(),
            slug: "platform".to_string(),
            description: None,
            privacy: Some("closed".to_string()),
        }
    }

    #[test]
    fn test_team_row_with_members() {
        let members = vec![
            TeamMember {
                login: "alice".to_string(),
            },
            TeamMember {
                login: "bob".to_string(),
            },
        ];

        let row = TeamRow::new(&team(), &members);
        assert_eq!(row.members, 2);
        assert_eq!(row.member_logins, "alice,bob");
        assert_eq!(row.privacy, "closed");
    }

    #[test]
    fn test_team_row_empty() {
        let row = TeamRow::new(&team(), &[]);
        assert_eq!(row.members, 0);
        assert_eq!(row.member_logins, "");
    }
}
