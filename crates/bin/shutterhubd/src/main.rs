//! Shutter hub daemon. Wires the shutter controller to the HTTP surface and
//! serves the control panel.

use std::sync::Arc;

use shutterhub_adapter_http_axum::{router, state::AppState};
use shutterhub_adapter_virtual::VirtualTransmitter;
use shutterhub_app::services::ControllerService;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // The GPIO-backed RF adapter only exists on the target hardware; the
    // virtual transmitter logs frames instead.
    let transmitter = VirtualTransmitter::new();
    let controller = Arc::new(ControllerService::new(transmitter));
    controller.spawn_workers();

    let state = AppState::from_arc(controller);
    let app = router::build(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("shutting down");
}
