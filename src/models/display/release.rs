//! Release size report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{checkmark, format_bytes};
use crate::client::models::Release;

/// One row per repository in the release size report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReleaseRow {
    /// Repository name
    #[tabled(rename = "REPO")]
    pub repo: String,

    /// Release count
    #[tabled(rename = "RELEASES")]
    pub releases: usize,

    /// Asset count across all releases
    #[tabled(rename = "ASSETS")]
    pub assets: usize,

    /// Total asset size in bytes
    #[tabled(rename = "BYTES")]
    pub total_bytes: u64,

    /// Total asset size, human-readable
    #[tabled(rename = "SIZE")]
    pub total_size: String,

    /// Set when the total exceeds the configured threshold
    #[tabled(rename = "OVER")]
    pub over_threshold: String,
}

impl ReleaseRow {
    /// Aggregate a repository's releases into a report row.
    pub fn from_releases(repo: &str, releases: &[Release], threshold_bytes: Option<u64>) -> Self {
        let assets = releases.iter().map(|r| r.assets.len()).sum();
        let total_bytes: u64 = releases.iter().map(|r| r.asset_bytes()).sum();
        let over = threshold_bytes.is_some_and(|t| total_bytes > t);

        Self {
            repo: repo.to_string(),
            releases: releases.len(),
            assets,
            total_bytes,
            total_size: format_bytes(total_bytes),
            over_threshold: checkmark(over),
        }
    }
}
