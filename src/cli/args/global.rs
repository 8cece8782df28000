//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags from the CLI into a single unit so handler
/// signatures stay small. Precedence for each option is: CLI flag >
/// environment variable > config file > default.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Organization override (bypasses config file)
    pub org: Option<String>,

    /// Access token override (bypasses config file)
    pub token: Option<String>,

    /// Custom config file path (defaults to ~/.ghreport/config.yaml)
    pub config: Option<String>,

    /// Custom API base URL for development/testing
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            token: cli.token.clone(),
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    /// Get organization override as `Option<&str>`.
    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            org: Some("acme".to_string()),
            token: Some("ghp_x".to_string()),
            config: Some("/custom/path".to_string()),
            api_url: Some("http://localhost:8080".to_string()),
        };

        assert_eq!(opts.org_ref(), Some("acme"));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Table,
            org: None,
            token: None,
            config: None,
            api_url: None,
        };

        assert_eq!(opts.org_ref(), None);
        assert_eq!(opts.config_ref(), None);
    }
}
