//! # kanban-api Server Entry Point
//!
//! Loads configuration, initializes tracing and the Prometheus recorder,
//! and serves the application with graceful shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::signal;

use kanban_api::{create_router, init_tracing, AppConfig, AppState};

/// Kanban Stack API server.
///
/// Tracks projects through a date-driven lifecycle and exposes CRUD,
/// paging, and guarded status transitions over REST.
#[derive(Parser, Debug)]
#[command(name = "kanban-api", version, about)]
struct Cli {
    /// Path to a configuration file (TOML/YAML/JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState::new(config, Some(metrics_handle));
    let app = create_router(state);

    tracing::info!(%addr, "server listening");
    tracing::info!("API document at /api-docs/openapi.json");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve when SIGINT (or SIGTERM on unix) arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
