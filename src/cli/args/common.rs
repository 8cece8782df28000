//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (global default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
