//! Upgrade Notifier Server
//!
//! Receives cluster node-pool upgrade events from a Pub/Sub push
//! subscription and relays the relevant ones to a Slack webhook.
//!
//! Configuration comes from the environment, read once at startup:
//! `SLACK_WEBHOOK_URL` (required) and `PORT` (optional, default 8080).

use std::sync::Arc;

use anyhow::{Context, Result};
use notifier_api::{create_router, AppState};
use notifier_core::{Notifier, NotifierConfig};
use notifier_slack::{SlackNotifier, SlackNotifierConfig};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Starting Upgrade Notifier");

    // Fail before binding anything if required configuration is absent.
    let config = Arc::new(
        NotifierConfig::from_env().context("invalid notifier configuration")?,
    );

    let notifier: Arc<dyn Notifier> = Arc::new(
        SlackNotifier::new(SlackNotifierConfig::from(config.as_ref()))
            .context("failed to create Slack notifier")?,
    );

    let app = create_router(AppState {
        config: config.clone(),
        notifier,
    })
    .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    info!(
        port = config.port,
        allowed_types = config.allowed_type_urls.len(),
        "Starting push endpoint"
    );

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Upgrade Notifier shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
