//! Webhook models

use serde::{Deserialize, Serialize};

/// A webhook as returned by the org and repo hook listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Hook ID
    pub id: u64,

    /// Hook name, "web" for standard webhooks
    #[serde(default)]
    pub name: Option<String>,

    /// Whether deliveries are enabled
    #[serde(default)]
    pub active: bool,

    /// Events the hook subscribes to
    #[serde(default)]
    pub events: Vec<String>,

    /// Delivery configuration
    #[serde(default)]
    pub config: WebhookConfig,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update time
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Delivery configuration of a webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Target URL
    #[serde(default)]
    pub url: Option<String>,

    /// Payload content type
    #[serde(default)]
    pub content_type: Option<String>,
}
