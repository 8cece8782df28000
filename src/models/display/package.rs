//! Package details report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{display_opt, format_bytes};
use crate::client::models::Package;

/// One row per package in the package details report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PackageRow {
    /// Package name
    #[tabled(rename = "PACKAGE")]
    pub name: String,

    /// Ecosystem (NPM, MAVEN, DOCKER, ...)
    #[tabled(rename = "TYPE")]
    pub package_type: String,

    /// Linked repository
    #[tabled(rename = "REPO")]
    pub repository: String,

    /// Version count (connection total)
    #[tabled(rename = "VERSIONS")]
    pub versions: u64,

    /// Total size in bytes across fetched version files
    #[tabled(rename = "BYTES")]
    pub total_bytes: u64,

    /// Total size, human-readable
    #[tabled(rename = "SIZE")]
    pub total_size: String,
}

impl From<&Package> for PackageRow {
    fn from(package: &Package) -> Self {
        let total_bytes = package.total_bytes();

        Self {
            name: package.name.clone(),
            package_type: display_opt(package.package_type.as_deref()),
            repository: display_opt(package.repository.as_ref().map(|r| r.name.as_str())),
            versions: package.versions.total_count,
            total_bytes,
            total_size: format_bytes(total_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_row_from_package() {
        let body = r#"{
            "name": "acme-web",
            "packageType": "DOCKER",
            "repository": {"name": "web"},
            "versions": {
                "totalCount": 3,
                "nodes": [
                    {"version": "2.0.0", "files": {"nodes": [{"size": 1024}]}},
                    {"version": "1.0.0", "files": {"nodes": [{"size": 1024}]}}
                ]
            }
        }"#;
        let package: Package = serde_json::from_str(body).unwrap();

        let row = PackageRow::from(&package);
        assert_eq!(row.name, "acme-web");
        assert_eq!(row.package_type, "DOCKER");
        assert_eq!(row.repository, "web");
        assert_eq!(row.versions, 3);
        assert_eq!(row.total_bytes, 2048);
        assert_eq!(row.total_size, "2.0 KiB");
    }

    #[test]
    fn test_package_row_unlinked() {
        let body = r#"{"name": "lib", "versions": {"totalCount": 0, "nodes": []}}"#;
        let package: Package = serde_json::from_str(body).unwrap();

        let row = PackageRow::from(&package);
        assert_eq!(row.repository, "--");
        assert_eq!(row.package_type, "--");
        assert_eq!(row.total_bytes, 0);
    }
}
