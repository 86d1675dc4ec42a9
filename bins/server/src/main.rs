//! Cloudinfo API Server
//!
//! Main entry point for the Cloudinfo service.

use std::net::SocketAddr;
use std::time::Instant;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloudinfo_api::{AppState, create_router};
use cloudinfo_core::process::{ProcessInfo, resolve_hostname};
use cloudinfo_shared::{AppConfig, AppError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime is measured from here
    let started_at = Instant::now();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let addr = config.server.bind_addr();
    let cloud = config.cloud_provider.clone();

    // Create application state
    let process = ProcessInfo::new(started_at, resolve_hostname());
    info!(hostname = %process.hostname(), "Host identifier resolved");
    let state = AppState::new(config, process);

    // Create router
    let app = create_router(state);

    // Start server
    let (listener, local_addr) = bind(&addr).await?;
    info!("Server listening on http://{}", local_addr);
    info!(cloud = %cloud, "Cloud provider configured");

    axum::serve(listener, app)
        .with_graceful_shutdown(terminate())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Binds the listener and returns it with the address actually bound.
///
/// The returned address carries the OS-assigned port when `addr` asks for port 0.
async fn bind(addr: &str) -> Result<(TcpListener, SocketAddr), AppError> {
    let to_bind_error = |source: std::io::Error| AppError::Bind {
        addr: addr.to_string(),
        source,
    };

    let listener = TcpListener::bind(addr).await.map_err(to_bind_error)?;
    let local_addr = listener.local_addr().map_err(to_bind_error)?;
    Ok((listener, local_addr))
}

#[cfg(unix)]
/// Waits for a termination signal.
async fn terminate() {
    use tokio::select;
    use tokio::signal::unix::{SignalKind, signal};
    use tracing::warn;

    let (Ok(mut sigterm), Ok(mut sigint)) = (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) else {
        warn!("Failed to install signal handlers; graceful shutdown disabled");
        return std::future::pending().await;
    };

    let signal = select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    info!("received {signal} signal: initiating shutdown");
}

#[cfg(windows)]
/// Waits for a termination signal.
async fn terminate() {
    use tracing::warn;

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; graceful shutdown disabled");
        return std::future::pending().await;
    }

    info!("received Ctrl-C signal: initiating shutdown");
}
