//! Relay Pipeline
//!
//! Sequences the per-event pipeline: decode the payload, check the
//! allow-list, render the message, deliver it. No state outlives one
//! invocation and no retries happen here; redelivery is the delivery
//! mechanism's concern.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::NotifierConfig;
use crate::envelope::{PubsubMessage, TYPE_URL_ATTRIBUTE};
use crate::error::Result;
use crate::filter::is_allowed;
use crate::format::render_message;

/// Outcome of relaying a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The message matched the allow-list and was delivered
    Delivered,
    /// The message type is not on the allow-list; nothing was sent
    Filtered,
}

/// Delivery seam. The production implementation posts to a Slack
/// webhook; tests substitute a recording mock.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<()>;
}

/// Relay one delivered message. Exactly one outbound delivery happens
/// for an allowed message and none for a filtered one.
pub async fn relay_event(
    message: &PubsubMessage,
    config: &NotifierConfig,
    notifier: &dyn Notifier,
) -> Result<RelayOutcome> {
    let text = message.decode_data()?;

    if !is_allowed(&message.attributes, &config.allowed_type_urls)? {
        debug!(
            type_url = message.attributes.get(TYPE_URL_ATTRIBUTE).unwrap_or("<none>"),
            "Event type not on allow-list, skipping"
        );
        return Ok(RelayOutcome::Filtered);
    }

    let rendered = render_message(&text, &message.attributes);
    notifier.deliver(&rendered).await?;

    info!(
        attribute_count = message.attributes.len(),
        "Upgrade notification delivered"
    );
    Ok(RelayOutcome::Delivered)
}
