//! GitHub API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::GitHubApi;
use super::graphql::{GraphQlRequest, GraphQlResponse};
use super::models::{
    Codespace, CodespacesData, Issue, Migration, OrgSummary, Package, PackagesData, Release,
    Repository, Team, TeamMember, User, Webhook,
};
use super::pagination::{PageParams, parse_next_link};
use crate::error::{ApiError, Result};

/// GitHub API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// REST API version header value
const API_VERSION: &str = "2022-11-28";

/// Requests per second. Keeps well under GitHub's secondary rate limits
/// for sequential REST traffic.
const RATE_LIMIT_PER_SECOND: u32 = 8;

/// GitHub API client
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    page_params: PageParams,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl GitHubClient {
    /// Create a new client against the production API.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, None)
    }

    /// Create a client with an optional base URL override (used by tests
    /// and the `GHREPORT_API_URL` environment variable).
    pub fn with_base_url(token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghreport/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::InvalidResponse("Token contains invalid characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| API_BASE_URL.to_string()),
            page_params: PageParams::default(),
            rate_limiter,
        })
    }

    /// Use the configured page size for REST listings.
    pub fn with_page_size(mut self, per_page: usize) -> Self {
        self.page_params = PageParams::with_per_page(per_page);
        self
    }

    /// Send a request through the rate limiter and map error statuses.
    async fn send_checked(&self, request: RequestBuilder) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => {
                // Secondary rate limits surface as 403 with a retry-after header
                if let Some(retry) = retry_after(&response) {
                    Err(ApiError::RateLimit(retry).into())
                } else {
                    Err(ApiError::Forbidden.into())
                }
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry = retry_after(&response).unwrap_or(Duration::from_secs(60));
                Err(ApiError::RateLimit(retry).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(msg).into())
            }
            status if status.is_server_error() => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(msg).into())
            }
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }

    /// Fetch a single JSON resource.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.send_checked(self.http.get(&url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }

    /// Fetch every page of a REST listing by following the `Link` header.
    async fn get_list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next_url: Option<String> = None;
        let mut page = 0usize;

        loop {
            let request = match &next_url {
                Some(url) => self.http.get(url),
                None => {
                    let mut query = self.page_params.to_query();
                    query.extend(extra_query.iter().cloned());
                    self.http
                        .get(format!("{}{}", self.base_url, path))
                        .query(&query)
                }
            };

            let response = self.send_checked(request).await?;
            page += 1;

            let next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let batch: Vec<T> = response.json().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse page {}: {}", page, e))
            })?;

            debug!("{}: page {} returned {} items", path, page, batch.len());
            items.extend(batch);

            match next {
                Some(url) => next_url = Some(url),
                None => break,
            }
        }

        Ok(items)
    }

    /// Execute a GraphQL query and unwrap the response envelope.
    async fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let request = self
            .http
            .post(format!("{}/graphql", self.base_url))
            .json(&GraphQlRequest { query, variables });

        let response = self.send_checked(request).await?;
        let envelope: GraphQlResponse<T> = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse GraphQL response: {}", e))
        })?;

        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::GraphQl(messages.join("; ")).into());
        }

        envelope
            .data
            .ok_or_else(|| ApiError::InvalidResponse("GraphQL response missing data".to_string()).into())
    }
}

/// Read a `retry-after` header as a duration.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Packages connection query. Versions and files are capped at one page
/// each; the nested caps cover all but pathological packages.
const PACKAGES_QUERY: &str = r#"
query OrgPackages($org: String!, $after: String) {
  organization(login: $org) {
    packages(first: 50, after: $after) {
      nodes {
        name
        packageType
        repository { name }
        versions(first: 100) {
          totalCount
          nodes {
            version
            files(first: 100) { nodes { size } }
          }
        }
      }
      pageInfo { hasNextPage endCursor }
    }
  }
}
"#;

/// Codespaces connection query.
const CODESPACES_QUERY: &str = r#"
query OrgCodespaces($org: String!, $after: String) {
  organization(login: $org) {
    codespaces(first: 100, after: $after) {
      totalCount
      nodes {
        name
        state
        createdAt
        lastUsedAt
        owner { login }
        repository { nameWithOwner }
        machine { displayName }
      }
      pageInfo { hasNextPage endCursor }
    }
  }
}
"#;

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.get_json("/user").await
    }

    async fn list_user_orgs(&self) -> Result<Vec<OrgSummary>> {
        self.get_list_all("/user/orgs", &[]).await
    }

    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.get_list_all(&format!("/orgs/{}/repos", org), &[("type", "all".to_string())])
            .await
    }

    async fn list_releases(&self, org: &str, repo: &str) -> Result<Vec<Release>> {
        self.get_list_all(&format!("/repos/{}/{}/releases", org, repo), &[])
            .await
    }

    async fn list_org_hooks(&self, org: &str) -> Result<Vec<Webhook>> {
        self.get_list_all(&format!("/orgs/{}/hooks", org), &[]).await
    }

    async fn list_repo_hooks(&self, org: &str, repo: &str) -> Result<Vec<Webhook>> {
        self.get_list_all(&format!("/repos/{}/{}/hooks", org, repo), &[])
            .await
    }

    async fn list_org_migrations(&self, org: &str) -> Result<Vec<Migration>> {
        self.get_list_all(&format!("/orgs/{}/migrations", org), &[])
            .await
    }

    async fn get_migration(&self, org: &str, id: u64) -> Result<Migration> {
        self.get_json(&format!("/orgs/{}/migrations/{}", org, id))
            .await
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.get_list_all(&format!("/orgs/{}/teams", org), &[]).await
    }

    async fn list_team_members(&self, org: &str, slug: &str) -> Result<Vec<TeamMember>> {
        self.get_list_all(&format!("/orgs/{}/teams/{}/members", org, slug), &[])
            .await
    }

    async fn list_issues(&self, org: &str, repo: &str, state: &str) -> Result<Vec<Issue>> {
        self.get_list_all(
            &format!("/repos/{}/{}/issues", org, repo),
            &[("state", state.to_string())],
        )
        .await
    }

    async fn list_org_packages(&self, org: &str) -> Result<Vec<Package>> {
        let mut packages = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let data: PackagesData = self
                .graphql(PACKAGES_QUERY, json!({ "org": org, "after": after }))
                .await?;

            let connection = data
                .organization
                .ok_or_else(|| ApiError::NotFound(format!("organization {}", org)))?
                .packages;

            debug!(
                "packages: fetched {} nodes, has_next_page={}",
                connection.nodes.len(),
                connection.page_info.has_next_page
            );
            packages.extend(connection.nodes);

            match connection.page_info.next_cursor() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(packages)
    }

    async fn list_org_codespaces(&self, org: &str) -> Result<Vec<Codespace>> {
        let mut codespaces = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let data: CodespacesData = self
                .graphql(CODESPACES_QUERY, json!({ "org": org, "after": after }))
                .await?;

            let connection = data
                .organization
                .ok_or_else(|| ApiError::NotFound(format!("organization {}", org)))?
                .codespaces;

            debug!(
                "codespaces: fetched {} of {} nodes",
                connection.nodes.len(),
                connection.total_count
            );
            codespaces.extend(connection.nodes);

            match connection.page_info.next_cursor() {
                Some(cursor) => after = Some(cursor.to_string()),
                None => break,
            }
        }

        Ok(codespaces)
    }
}
