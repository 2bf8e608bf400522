//! Sentiview
//!
//! Minimal web front end for hosted sentiment analysis: serves the
//! prediction form, forwards submitted text to the selected model's remote
//! endpoint, and renders the top-ranked (label, score) pair.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use sentiview_web::cli::Cli;
use sentiview_web::config::AppConfig;
use sentiview_web::routes::create_router;
use sentiview_web::state::AppState;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting Sentiview");

    // Load configuration
    let config = AppConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Registered models: {}", config.models.len());

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Build application state; fails here on a missing token or bad model table
    let state = AppState::from_config(&config, metrics_handle)?;

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    // Graceful shutdown handler
    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
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

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentiview=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentiview=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "sentiview_requests_total",
        "Total number of prediction requests received"
    );
    metrics::describe_counter!(
        "sentiview_errors_total",
        "Total number of failed requests by error response"
    );
    metrics::describe_histogram!(
        "sentiview_inference_latency_ms",
        metrics::Unit::Milliseconds,
        "Remote inference call latency in milliseconds"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
