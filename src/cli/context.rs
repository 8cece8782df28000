//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, token validation, and client initialization.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// API client (Arc-wrapped so handlers can clone it into helpers)
    pub client: Arc<GitHubClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads config from the given path (or the default location), applies
    /// token/org overrides, validates that a token is present, and builds
    /// the API client.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            // A token flag/env alone is enough to run without a config file
            Err(_) if opts.token.is_some() => Config::default(),
            Err(err) => return Err(err),
        };

        if let Some(ref token) = opts.token {
            config.token = Some(token.clone());
        }
        if let Some(org) = opts.org_ref() {
            config.org = Some(org.to_string());
        }

        config.validate_auth()?;

        let client = Arc::new(
            GitHubClient::with_base_url(config.token.clone(), opts.api_url.clone())?
                .with_page_size(config.preferences.page_size),
        );

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Get the organization login, returning an error if not set.
    pub fn require_org(&self) -> Result<&str> {
        self.config
            .org
            .as_deref()
            .ok_or_else(|| crate::error::ConfigError::MissingOrg.into())
    }
}
