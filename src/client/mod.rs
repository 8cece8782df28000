//! GitHub API client

use async_trait::async_trait;

use crate::error::Result;

pub mod github;
pub mod graphql;
pub mod models;
pub mod pagination;

pub use github::GitHubClient;
pub use pagination::{DEFAULT_PER_PAGE, PageParams, parse_next_link};

use models::{
    Codespace, Issue, Migration, OrgSummary, Package, Release, Repository, Team, TeamMember, User,
    Webhook,
};

/// GitHub API operations used by the report commands.
///
/// REST listings drain every page by following the `Link` header; the
/// GraphQL listings (packages, codespaces) follow `endCursor` while
/// `hasNextPage` is true. All methods issue one request at a time.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch the authenticated user (token verification)
    async fn current_user(&self) -> Result<User>;

    /// List organizations the token can see
    async fn list_user_orgs(&self) -> Result<Vec<OrgSummary>>;

    /// List all repositories of an organization
    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>>;

    /// List all releases of a repository, assets included
    async fn list_releases(&self, org: &str, repo: &str) -> Result<Vec<Release>>;

    /// List organization-level webhooks
    async fn list_org_hooks(&self, org: &str) -> Result<Vec<Webhook>>;

    /// List webhooks configured on a single repository
    async fn list_repo_hooks(&self, org: &str, repo: &str) -> Result<Vec<Webhook>>;

    /// List organization migrations (most recent first)
    async fn list_org_migrations(&self, org: &str) -> Result<Vec<Migration>>;

    /// Fetch the current state of a single migration
    async fn get_migration(&self, org: &str, id: u64) -> Result<Migration>;

    /// List organization teams
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// List members of a team by slug
    async fn list_team_members(&self, org: &str, slug: &str) -> Result<Vec<TeamMember>>;

    /// List issues of a repository filtered by state (open, closed, all).
    /// Pull requests are included by the API and filtered by the caller.
    async fn list_issues(&self, org: &str, repo: &str, state: &str) -> Result<Vec<Issue>>;

    /// List organization packages with versions and file sizes (GraphQL)
    async fn list_org_packages(&self, org: &str) -> Result<Vec<Package>>;

    /// List organization codespaces (GraphQL)
    async fn list_org_codespaces(&self, org: &str) -> Result<Vec<Codespace>>;
}
