//! Package models for the GraphQL packages connection

use serde::Deserialize;

use crate::client::graphql::PageInfo;

/// Top-level data shape for the packages query.
#[derive(Debug, Deserialize)]
pub struct PackagesData {
    /// The queried organization, absent if not visible to the token
    pub organization: Option<PackagesOrganization>,
}

/// Organization wrapper holding the packages connection.
#[derive(Debug, Deserialize)]
pub struct PackagesOrganization {
    /// One page of the packages connection
    pub packages: PackageConnection,
}

/// A page of packages.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageConnection {
    /// Packages on this page
    #[serde(default)]
    pub nodes: Vec<Package>,

    /// Cursor state for the next request
    #[serde(default)]
    pub page_info: PageInfo,
}

/// A single organization package with its versions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package name
    pub name: String,

    /// Package ecosystem (NPM, MAVEN, DOCKER, ...)
    #[serde(default)]
    pub package_type: Option<String>,

    /// Repository the package is attached to, if any
    #[serde(default)]
    pub repository: Option<PackageRepository>,

    /// Versions of the package (first page, newest first)
    pub versions: PackageVersionConnection,
}

impl Package {
    /// Total size in bytes across all fetched version files.
    pub fn total_bytes(&self) -> u64 {
        self.versions
            .nodes
            .iter()
            .map(|v| v.file_bytes())
            .sum()
    }
}

/// Repository reference on a package.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRepository {
    /// Repository name
    pub name: String,
}

/// A page of package versions with the connection total.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageVersionConnection {
    /// Total version count across all pages
    #[serde(default)]
    pub total_count: u64,

    /// Versions on this page
    #[serde(default)]
    pub nodes: Vec<PackageVersion>,
}

/// A single package version with its files.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageVersion {
    /// Version string
    pub version: String,

    /// Files belonging to this version
    #[serde(default)]
    pub files: Option<PackageFileConnection>,
}

impl PackageVersion {
    /// Size in bytes across this version's files.
    pub fn file_bytes(&self) -> u64 {
        self.files
            .as_ref()
            .map(|f| f.nodes.iter().filter_map(|n| n.size).sum())
            .unwrap_or(0)
    }
}

/// Files of a package version.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageFileConnection {
    /// File entries
    #[serde(default)]
    pub nodes: Vec<PackageFile>,
}

/// A single file within a package version.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageFile {
    /// File size in bytes, null for some ecosystems
    #[serde(default)]
    pub size: Option<u64>,
}
