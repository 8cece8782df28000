//! Team and membership models

use serde::{Deserialize, Serialize};

/// A team as returned by `GET /orgs/{org}/teams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// URL-safe slug used in member lookups
    pub slug: String,

    /// Team description
    #[serde(default)]
    pub description: Option<String>,

    /// Privacy setting (closed, secret)
    #[serde(default)]
    pub privacy: Option<String>,
}

/// A member of a team, from `GET /orgs/{org}/teams/{slug}/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Account login
    pub login: String,
}
