//! Notifier Configuration
//!
//! Explicit configuration value constructed once at process start and
//! passed into the pipeline. Components never read the environment
//! themselves.

use std::time::Duration;

use crate::error::{NotifierError, Result};
use crate::filter::UPGRADE_EVENT_TYPE_URL;

/// Required: destination webhook for rendered messages.
pub const SLACK_WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";
/// Optional: port the push endpoint binds to.
pub const PORT_VAR: &str = "PORT";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Slack incoming webhook URL
    pub slack_webhook_url: String,
    /// Event schemas permitted to trigger a notification; empty allows all
    pub allowed_type_urls: Vec<String>,
    /// Connect timeout for the webhook client
    pub connect_timeout: Duration,
    /// Request timeout for the webhook client
    pub request_timeout: Duration,
    /// Port the push endpoint binds to
    pub port: u16,
}

impl NotifierConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack_webhook_url = lookup(SLACK_WEBHOOK_URL_VAR)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                NotifierError::configuration(format!("{} is not set", SLACK_WEBHOOK_URL_VAR))
            })?;

        let port = lookup(PORT_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            slack_webhook_url,
            // Fixed in current scope: only node-pool auto-upgrade events
            // trigger a notification.
            allowed_type_urls: vec![UPGRADE_EVENT_TYPE_URL.to_string()],
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            port,
        })
    }
}
