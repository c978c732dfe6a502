//! Slack Webhook Notifier
//!
//! Posts rendered messages to a Slack incoming webhook. One POST per
//! delivery, no retries; a failed call is reported to the caller and
//! redelivery is governed by the upstream delivery mechanism.

use std::time::Duration;

use async_trait::async_trait;
use notifier_core::{Notifier, NotifierConfig, NotifierError, Result};
use serde::Serialize;
use tracing::{debug, warn};

/// Slack webhook client configuration
#[derive(Debug, Clone)]
pub struct SlackNotifierConfig {
    /// Incoming webhook URL
    pub webhook_url: String,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for SlackNotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&NotifierConfig> for SlackNotifierConfig {
    fn from(config: &NotifierConfig) -> Self {
        Self {
            webhook_url: config.slack_webhook_url.clone(),
            connect_timeout: config.connect_timeout,
            request_timeout: config.request_timeout,
        }
    }
}

/// Webhook request body. Slack posts the `text` field into the channel.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Notifier that delivers to a Slack incoming webhook over HTTP
pub struct SlackNotifier {
    config: SlackNotifierConfig,
    client: reqwest::Client,
}

impl SlackNotifier {
    pub fn new(config: SlackNotifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                NotifierError::configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn deliver(&self, text: &str) -> Result<()> {
        debug!(bytes = text.len(), "Posting message to Slack webhook");

        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&WebhookPayload { text })
            .send()
            .await
            .map_err(|e| NotifierError::delivery(None, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Slack webhook rejected message");
        Err(NotifierError::delivery(
            Some(status.as_u16()),
            format!("HTTP {}: {}", status, body),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notifier_for(webhook_url: String) -> SlackNotifier {
        SlackNotifier::new(SlackNotifierConfig {
            webhook_url,
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn posts_text_payload_to_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/T0/B0/X"))
            .and(body_json(serde_json::json!({ "text": "Node pool upgraded" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = notifier_for(format!("{}/services/T0/B0/X", server.uri()));
        notifier.deliver("Node pool upgraded").await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_delivery_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server_error"))
            .mount(&server)
            .await;

        let notifier = notifier_for(server.uri());
        let err = notifier.deliver("text").await.unwrap_err();

        match err {
            NotifierError::Delivery { status, message } => {
                assert_eq!(status, Some(500));
                assert!(message.contains("server_error"));
            }
            other => panic!("expected delivery error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_delivery_error() {
        // Nothing listens on the discard port.
        let notifier = notifier_for("http://127.0.0.1:9/services/T0/B0/X".to_string());
        let err = notifier.deliver("text").await.unwrap_err();

        assert!(matches!(err, NotifierError::Delivery { status: None, .. }));
    }
}
