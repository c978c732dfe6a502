//! Push Envelope Types
//!
//! Model of the unit of work POSTed by the push subscription: one
//! message carrying a base64-encoded payload and string attributes,
//! wrapped with delivery context (message id, publish time,
//! subscription) that is accepted for logging but never inspected by
//! the decision logic.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{NotifierError, Result};

/// Attribute key identifying the schema of the payload.
pub const TYPE_URL_ATTRIBUTE: &str = "type_url";

/// String attributes attached to a message, preserving the order they
/// appear in the envelope document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Lookup for attributes the pipeline requires. Absence is an
    /// explicit error rather than an uncaught lookup failure.
    pub fn get_or_missing(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| NotifierError::missing_attribute(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single message as delivered by the push subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubsubMessage {
    /// Base64-encoded payload
    pub data: String,
    #[serde(default)]
    pub attributes: Attributes,
    /// Delivery-assigned id, used for log correlation only
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub publish_time: Option<DateTime<Utc>>,
}

impl PubsubMessage {
    /// Decode the transit-encoded payload into text.
    pub fn decode_data(&self) -> Result<String> {
        let bytes = STANDARD.decode(&self.data)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Full body of one push delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEnvelope {
    pub message: PubsubMessage,
    /// Subscription that delivered the message, accepted for logging only
    #[serde(default)]
    pub subscription: Option<String>,
}
