//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod codespaces;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod init;
pub mod issues;
pub mod migrations;
pub mod packages;
pub mod releases;
pub mod repos;
pub mod status;
pub mod teams;
pub mod webhooks;

pub use args::{GlobalOptions, OutputFormat, ReportArgs};
pub use context::CommandContext;

/// ghreport - CSV and Markdown reporting companion for GitHub organizations
#[derive(Parser, Debug)]
#[command(name = "ghreport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "GHREPORT_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override default organization
    #[arg(long, global = true, env = "GHREPORT_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override configured access token
    #[arg(long, global = true, env = "GHREPORT_TOKEN", hide_env = true, hide = true)]
    pub token: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "GHREPORT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override API base URL (development/testing)
    #[arg(long, global = true, env = "GHREPORT_API_URL", hide_env = true, hide = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHREPORT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize ghreport configuration
    Init,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Repository inventory reports
    #[command(subcommand)]
    Repos(ReposCommands),

    /// Release asset size reports
    #[command(subcommand)]
    Releases(ReleasesCommands),

    /// Package version size reports
    #[command(subcommand)]
    Packages(PackagesCommands),

    /// Webhook inventory reports
    #[command(subcommand)]
    Webhooks(WebhooksCommands),

    /// Organization migration reports
    #[command(subcommand)]
    Migrations(MigrationsCommands),

    /// Codespace usage reports
    #[command(subcommand)]
    Codespaces(CodespacesCommands),

    /// Team membership reports
    #[command(subcommand)]
    Teams(TeamsCommands),

    /// Issue reports
    #[command(subcommand)]
    Issues(IssuesCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Repository report subcommands
#[derive(Subcommand, Debug)]
pub enum ReposCommands {
    /// Report all repositories in the organization
    Report {
        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Release report subcommands
#[derive(Subcommand, Debug)]
pub enum ReleasesCommands {
    /// Report release asset sizes per repository
    #[command(after_help = "EXAMPLES:\n  \
            ghreport releases report                          # Table to stdout\n  \
            ghreport releases report --output sizes.csv       # CSV file\n  \
            ghreport releases report --threshold-mb 500       # Flag repos over 500 MB")]
    Report {
        /// Flag repositories whose total asset size exceeds this many megabytes
        #[arg(long, value_name = "MB")]
        threshold_mb: Option<u64>,

        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Package report subcommands
#[derive(Subcommand, Debug)]
pub enum PackagesCommands {
    /// Report organization packages with version counts and sizes
    Report {
        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Webhook report subcommands
#[derive(Subcommand, Debug)]
pub enum WebhooksCommands {
    /// Report organization and repository webhooks
    Report {
        /// Only report organization-level hooks, skip per-repository hooks
        #[arg(long)]
        org_only: bool,

        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Migration report subcommands
#[derive(Subcommand, Debug)]
pub enum MigrationsCommands {
    /// Report organization migrations with current state
    Report {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show the current state of a single migration
    Status {
        /// Migration ID
        id: u64,
    },
}

/// Codespace report subcommands
#[derive(Subcommand, Debug)]
pub enum CodespacesCommands {
    /// Report codespaces across the organization
    Report {
        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Team report subcommands
#[derive(Subcommand, Debug)]
pub enum TeamsCommands {
    /// Report teams with their member logins
    Report {
        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Issue report subcommands
#[derive(Subcommand, Debug)]
pub enum IssuesCommands {
    /// Report issues across the organization's repositories
    #[command(after_help = "EXAMPLES:\n  \
            ghreport issues report                      # Open issues, all repos\n  \
            ghreport issues report --state all          # Include closed\n  \
            ghreport issues report --repo api           # Single repository")]
    Report {
        /// Issue state filter (open, closed, all)
        #[arg(long, default_value = "open")]
        state: String,

        /// Restrict to a single repository
        #[arg(long)]
        repo: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },
}
