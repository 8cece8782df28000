//! Webhook report row

use serde::Serialize;
use tabled::Tabled;

use super::common::{checkmark, display_opt, truncate_string};
use crate::client::models::Webhook;

/// One row per webhook in the webhook report. `scope` is "org" for
/// organization-level hooks or the repository name otherwise.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WebhookRow {
    /// Where the hook is configured
    #[tabled(rename = "SCOPE")]
    pub scope: String,

    /// Hook ID
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Target URL
    #[tabled(rename = "URL")]
    pub url: String,

    /// Subscribed events, comma-separated
    #[tabled(rename = "EVENTS")]
    pub events: String,

    /// Active marker
    #[tabled(rename = "ACTIVE")]
    pub active: String,

    /// Payload content type
    #[tabled(rename = "CONTENT")]
    pub content_type: String,
}

impl WebhookRow {
    /// Build a row for a hook found at the given scope.
    pub fn new(scope: &str, hook: &Webhook) -> Self {
        Self {
            scope: scope.to_string(),
            id: hook.id,
            url: display_opt(hook.config.url.as_deref()),
            events: truncate_string(&hook.events.join(","), 60),
            active: checkmark(hook.active),
            content_type: display_opt(hook.config.content_type.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::WebhookConfig;

    #[test]
    fn test_webhook_row() {
        let hook = Webhook {
            id: 7,
            name: Some("web".to_string()),
            active: true,
            events: vec!["push".to_string(), "release".to_string()],
            config: WebhookConfig {
                url: Some("https://ci.example.com/hook".to_string()),
                content_type: Some("json".to_string()),
            },
            created_at: None,
            updated_at: None,
        };

        let row = WebhookRow::new("api", &hook);
        assert_eq!(row.scope, "api");
        assert_eq!(row.events, "push,release");
        assert_eq!(row.active, "\u{2713}");
        assert_eq!(row.url, "https://ci.example.com/hook");
    }

    #[test]
    fn test_webhook_row_missing_config() {
        let hook = Webhook {
            id: 1,
            name: None,
            active: false,
            events: vec![],
            config: WebhookConfig::default(),
            created_at: None,
            updated_at: None,
        };

        let row = WebhookRow::new("org", &hook);
        assert_eq!(row.url, "--");
        assert_eq!(row.active, "");
        assert_eq!(row.events, "");
    }
}
