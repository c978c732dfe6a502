//! Upgrade Notifier Core
//!
//! Decision logic for relaying cluster node-pool upgrade events to a
//! chat webhook:
//! - Envelope: model of the push delivery plus payload decoding
//! - Filter: allow-list check on the event's declared type
//! - Format: renders the payload and attributes into the message text
//! - Relay: per-event pipeline behind the `Notifier` delivery seam
//! - Config: explicit configuration constructed once at startup

pub mod config;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod format;
pub mod relay;

pub use config::NotifierConfig;
pub use envelope::{Attributes, PubsubMessage, PushEnvelope, TYPE_URL_ATTRIBUTE};
pub use error::{NotifierError, Result};
pub use filter::{is_allowed, UPGRADE_EVENT_TYPE_URL};
pub use format::render_message;
pub use relay::{relay_event, Notifier, RelayOutcome};
