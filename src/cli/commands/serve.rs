//! Serve command - run the HTTP search API

use crate::core::services::Services;
use crate::http;
use clap::Args;
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// JSON file with the documents to serve (overrides config)
    #[arg(long, short = 'd')]
    pub documents: Option<std::path::PathBuf>,
}

/// Execute the serve command
///
/// Host, port and document overrides are already folded into the
/// configuration by the time this runs.
pub async fn execute(
    _args: ServeArgs,
    services: &Arc<Services>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting CAALM search service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = &services.config;
    crate::core::xdg::XdgDirs::new().log_paths();
    config.log_config();
    tracing::info!("Document source: {}", services.source.describe());

    let app = http::router(Arc::clone(services));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
