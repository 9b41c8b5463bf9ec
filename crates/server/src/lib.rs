//! # Citizen AI Server
//!
//! The JSON API in front of the citizen-services assistant: chat, feedback,
//! concerns, the service catalogue and the admin dashboard.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

use crate::{
    config::{get_config, AppConfig},
    router::create_router,
    state::build_app_state,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Builds the state from `config` and serves the API on `listener` until the
/// process receives Ctrl-C.
pub async fn run(listener: TcpListener, config: AppConfig) -> anyhow::Result<()> {
    let app_state = build_app_state(config).await?;
    if app_state.assistant.has_backend() {
        info!("Answering with the configured backend, gated by the knowledge base.");
    } else {
        warn!("Running in fallback mode: every answer comes from the knowledge base.");
    }
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C, shutting down: {e}");
    }
}

/// Installs the global log subscriber. `RUST_LOG` overrides the `info` default.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// The library's main entry point.
///
/// Loads `.env`, logging and configuration, binds the port, then calls `run`.
/// `CONFIG_PATH` selects a configuration file other than the crate's
/// `config.yml`.
pub async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = get_config(config_path.as_deref())?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(
        port = config.port,
        backend = ?config.backend.as_ref().map(|b| &b.provider),
        "Configuration loaded."
    );

    run(listener, config).await
}
