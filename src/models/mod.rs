//! Local models for report output

pub mod display;

pub use display::{
    CodespaceRow, IssueRow, MigrationRow, PackageRow, ReleaseRow, RepoRow, TeamRow, WebhookRow,
    format_bytes,
};
