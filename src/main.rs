//! ghreport - CSV and Markdown reporting companion for GitHub organizations

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod report;

use cli::args::GlobalOptions;
use cli::{
    Cli, CodespacesCommands, Commands, IssuesCommands, MigrationsCommands, PackagesCommands,
    ReleasesCommands, ReposCommands, TeamsCommands, WebhooksCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Progress and warnings go to stderr, report data to stdout
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("ghreport version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Repos(cmd) => match cmd {
            ReposCommands::Report { report } => cli::repos::report(&opts, &report).await,
        },
        Commands::Releases(cmd) => match cmd {
            ReleasesCommands::Report {
                threshold_mb,
                report,
            } => cli::releases::report(&opts, &report, threshold_mb).await,
        },
        Commands::Packages(cmd) => match cmd {
            PackagesCommands::Report { report } => cli::packages::report(&opts, &report).await,
        },
        Commands::Webhooks(cmd) => match cmd {
            WebhooksCommands::Report { org_only, report } => {
                cli::webhooks::report(&opts, &report, org_only).await
            }
        },
        Commands::Migrations(cmd) => match cmd {
            MigrationsCommands::Report { report } => cli::migrations::report(&opts, &report).await,
            MigrationsCommands::Status { id } => cli::migrations::status(&opts, id).await,
        },
        Commands::Codespaces(cmd) => match cmd {
            CodespacesCommands::Report { report } => cli::codespaces::report(&opts, &report).await,
        },
        Commands::Teams(cmd) => match cmd {
            TeamsCommands::Report { report } => cli::teams::report(&opts, &report).await,
        },
        Commands::Issues(cmd) => match cmd {
            IssuesCommands::Report {
                state,
                repo,
                report,
            } => cli::issues::report(&opts, &report, &state, repo.as_deref()).await,
        },
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
