//! Upgrade Notifier API
//!
//! HTTP surface for the push delivery mechanism:
//! - `POST /pubsub/push`: one envelope per request; the response status
//!   signals the outcome back to the delivery mechanism
//! - `GET /health`: liveness for the hosting platform

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use notifier_core::{relay_event, Notifier, NotifierConfig, NotifierError, PushEnvelope, RelayOutcome};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NotifierConfig>,
    pub notifier: Arc<dyn Notifier>,
}

/// Simple health response for basic health check
#[derive(Serialize)]
pub struct HealthResponse {
    /// Health status: UP
    pub status: String,
    /// Application version
    pub version: String,
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pubsub/push", post(receive_push))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Accept one push delivery and run the relay pipeline.
///
/// Both delivered and filtered events return 204: either way the event
/// is consumed and must not be redelivered. Errors map to a non-2xx
/// status so the delivery mechanism's redelivery policy takes over.
async fn receive_push(
    State(state): State<AppState>,
    Json(envelope): Json<PushEnvelope>,
) -> StatusCode {
    match relay_event(&envelope.message, &state.config, state.notifier.as_ref()).await {
        Ok(RelayOutcome::Delivered) | Ok(RelayOutcome::Filtered) => StatusCode::NO_CONTENT,
        Err(e) => {
            warn!(
                message_id = envelope.message.message_id.as_deref().unwrap_or("<unknown>"),
                subscription = envelope.subscription.as_deref().unwrap_or("<unknown>"),
                error = %e,
                "Failed to relay push delivery"
            );
            status_for(&e)
        }
    }
}

/// Map pipeline errors to response statuses for the delivery mechanism.
fn status_for(error: &NotifierError) -> StatusCode {
    match error {
        // Malformed envelopes cannot succeed on redelivery, but the
        // failure must stay observable upstream.
        NotifierError::Decode(_)
        | NotifierError::Utf8(_)
        | NotifierError::MissingAttribute { .. } => StatusCode::BAD_REQUEST,
        NotifierError::Delivery { .. } => StatusCode::BAD_GATEWAY,
        NotifierError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
