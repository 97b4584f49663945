//! OpenSearch Dashboards Exporter — Entry Point
//!
//! Polls the dashboards `/api/status` endpoint on every Prometheus
//! scrape and republishes its figures as `opensearch_dashboards_*`
//! gauges. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Parse CLI flags + credential env vars, merge optional config.toml
//! 2. Init tracing (text or JSON)
//! 3. Create DashboardsClient (implements StatusSource port)
//! 4. Register DashboardsCollector with the exposition registry
//! 5. Serve /metrics on the configured port
//! 6. Wait for SIGINT → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use opensearch_dashboards_exporter::adapters::metrics::{ExporterServer, ExpositionRegistry};
use opensearch_dashboards_exporter::adapters::upstream::DashboardsClient;
use opensearch_dashboards_exporter::config::{self, Cli, LogFormat, LoggingConfig};
use opensearch_dashboards_exporter::usecases::DashboardsCollector;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let cli = Cli::parse();
    let config = config::loader::load_config(&cli).context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.upstream.url,
        port = config.server.port,
        timeout_seconds = config.upstream.timeout_seconds,
        basic_auth = config.upstream.credentials().is_some(),
        "Starting OpenSearch Dashboards exporter"
    );
    if !config.upstream.verify_tls {
        warn!("Upstream TLS certificate verification is disabled");
    }

    // ── 3. Upstream client (StatusSource port) ──────────────
    let client = Arc::new(
        DashboardsClient::new(&config.upstream).context("Failed to create dashboards client")?,
    );

    // ── 4. Registry with the dashboards collector ───────────
    let mut registry = ExpositionRegistry::new();
    registry.register(Arc::new(DashboardsCollector::new(client)));
    let registry = Arc::new(registry);

    // ── 5. Exposition server ────────────────────────────────
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let server = ExporterServer::new(registry, config.server.socket_addr());
    let mut server_handle = tokio::spawn(async move {
        if let Err(e) = server.run(shutdown_rx).await {
            error!(error = %e, "Exporter server failed");
        }
    });

    // ── 6. Wait for SIGINT ──────────────────────────────────
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
        _ = &mut server_handle => {
            anyhow::bail!("Exporter server stopped unexpectedly");
        }
    }

    let _ = shutdown_tx.send(());
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), server_handle).await;
    info!("Shutdown complete");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
