//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{GitHubApi, GitHubClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Interactive setup against the production API. A custom API URL can be
/// supplied via `GHREPORT_API_URL` for development setups.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to ghreport!".bold().green());
    println!("Let's set up your GitHub configuration.\n");

    // Prompt for token
    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your GitHub personal access token")
        .interact()?;

    // Verify the token before saving anything
    println!("\n{}", "Verifying token...".cyan());
    let client = GitHubClient::with_base_url(Some(token.clone()), opts.api_url.clone())?;
    let user = client.current_user().await?;

    println!("{} Authenticated as {}", "✓".green(), user.login.bold());

    // Fetch organizations the token can see
    println!("\n{}", "Fetching your organizations...".cyan());
    let orgs = client.list_user_orgs().await?;

    // Prompt for default organization
    let org = if orgs.is_empty() {
        println!("{}", "⚠ No organizations found.".yellow());
        None
    } else if orgs.len() == 1 {
        let org = &orgs[0];
        println!("Found organization: {}", org.login.bold());
        let use_org = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Set this as your default organization?")
            .default(true)
            .interact()?;

        if use_org { Some(org.login.clone()) } else { None }
    } else {
        let org_names: Vec<String> = orgs.iter().map(|o| o.login.clone()).collect();

        println!("Found {} organizations.", orgs.len());
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select your default organization")
            .items(&org_names)
            .default(0)
            .interact_opt()?;

        selection.map(|idx| orgs[idx].login.clone())
    };

    let config = Config {
        token: Some(token),
        org,
        preferences: Default::default(),
    };
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if let Some(ref org) = config.org {
        println!("  Default organization: {}", org.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "ghreport status".cyan());
    println!(
        "  {} - Repository inventory",
        "ghreport repos report".cyan()
    );

    Ok(())
}
