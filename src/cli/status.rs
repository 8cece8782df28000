//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ghreport Configuration Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            // Token status
            if config.token.is_some() || opts.token.is_some() {
                println!("{} Access token configured", "✓".green());
            } else {
                println!("{} Access token not configured", "✗".red());
                println!("  → Run 'ghreport init' to configure");
            }

            // Organization status
            if let Some(org) = opts.org_ref().or(config.org.as_deref()) {
                println!("{} Default organization: {}", "✓".green(), org);
            } else {
                println!("{} No default organization set", "○".dimmed());
                println!("  → Pass --org or re-run 'ghreport init'");
            }

            // Preferences (only shown when set)
            if let Some(ref format) = config.preferences.format {
                println!("{} Preferred format: {}", "○".dimmed(), format.cyan());
            }
            if let Some(ref url) = opts.api_url {
                println!("{} Custom API URL: {}", "○".dimmed(), url.cyan());
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "ghreport init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
