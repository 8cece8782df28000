//! Report row models for table, JSON, CSV, and Markdown output
//!
//! Each row type derives both `Tabled` and `Serialize` so a single vector
//! of rows feeds every output path.

mod codespace;
mod common;
mod issue;
mod migration;
mod package;
mod release;
mod repo;
mod team;
mod webhook;

pub use codespace::CodespaceRow;
pub use common::format_bytes;
pub use issue::IssueRow;
pub use migration::MigrationRow;
pub use package::PackageRow;
pub use release::ReleaseRow;
pub use repo::RepoRow;
pub use team::TeamRow;
pub use webhook::WebhookRow;
