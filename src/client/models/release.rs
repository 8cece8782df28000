//! Release and release asset models

use serde::{Deserialize, Serialize};

/// A release as returned by `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release ID
    pub id: u64,

    /// Git tag the release points at
    pub tag_name: String,

    /// Release title
    #[serde(default)]
    pub name: Option<String>,

    /// Whether this is an unpublished draft
    #[serde(default)]
    pub draft: bool,

    /// Whether this is marked as a prerelease
    #[serde(default)]
    pub prerelease: bool,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// Uploaded assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Total size in bytes across all assets of this release.
    pub fn asset_bytes(&self) -> u64 {
        self.assets.iter().map(|a| a.size).sum()
    }
}

/// A single uploaded release asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name
    pub name: String,

    /// Size in bytes
    #[serde(default)]
    pub size: u64,

    /// Download count
    #[serde(default)]
    pub download_count: u64,

    /// Upload time
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_asset_bytes_sums() {
        let body = r#"{
            "id": 1,
            "tag_name": "v1.2.0",
            "assets": [
                {"name": "cli-linux.tar.gz", "size": 1000, "download_count": 3},
                {"name": "cli-macos.tar.gz", "size": 2500, "download_count": 1}
            ]
        }"#;
        let release: Release = serde_json::from_str(body).unwrap();
        assert_eq!(release.asset_bytes(), 3500);
        assert_eq!(release.assets.len(), 2);
    }

    #[test]
    fn test_release_without_assets() {
        let body = r#"{"id": 2, "tag_name": "v0.1.0", "draft": true}"#;
        let release: Release = serde_json::from_str(body).unwrap();
        assert!(release.draft);
        assert_eq!(release.asset_bytes(), 0);
    }
}
