//! API resource models
//!
//! One module per remote resource. REST models derive `Serialize` as well so
//! raw records can round-trip through the JSON output path; the GraphQL
//! connection types only deserialize.

mod codespace;
mod issue;
mod migration;
mod package;
mod release;
mod repo;
mod team;
mod webhook;

pub use codespace::{Codespace, CodespaceConnection, CodespacesData};
pub use issue::{Issue, IssueAuthor, IssueLabel};
pub use migration::{Migration, MigrationRepository};
pub use package::{Package, PackageConnection, PackageVersion, PackagesData};
pub use release::{Release, ReleaseAsset};
pub use repo::{OrgSummary, Repository, User};
pub use team::{Team, TeamMember};
pub use webhook::{Webhook, WebhookConfig};
