//! Meetline HTTP server
//!
//! # Environment Variables
//!
//! - `MEETLINE_*`: configuration overrides (see `meetline_infra::config`)
//! - `RUST_LOG`: log filter, overrides the configured level

use anyhow::Context;
use meetline_api::{create_router, AppContext, AppState};
use meetline_infra::{config, init_tracing};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    let host = config.server.host.clone();
    let port = config.server.port;

    let ctx = AppContext::new(config)?;
    let app = create_router(AppState::from(&ctx));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!(addr = %listener.local_addr()?, "meetline listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("meetline stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
