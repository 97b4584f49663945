//! Exposition Server - `/metrics` over HTTP
//!
//! Serves the Prometheus scrape endpoint via axum 0.7. Every request
//! to `/metrics` triggers one collection of the registry. `/` serves a
//! small landing page; any other path is a 404.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use prometheus::TEXT_FORMAT;
use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use super::exposition::ExpositionRegistry;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>OpenSearch Dashboards Exporter</title></head>
<body>
<h1>OpenSearch Dashboards Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
</body>
</html>
"#;

/// Build the exporter routes over a registry.
pub fn router(registry: Arc<ExpositionRegistry>) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/", get(index))
        .fallback(not_found)
        .with_state(registry)
}

/// Axum-based exposition HTTP server.
pub struct ExporterServer {
    /// Registry collected on every scrape.
    registry: Arc<ExpositionRegistry>,
    /// `address:port` to bind.
    bind_address: String,
}

impl ExporterServer {
    /// Create a new exposition server.
    pub fn new(registry: Arc<ExpositionRegistry>, bind_address: String) -> Self {
        Self {
            registry,
            bind_address,
        }
    }

    /// Bind and serve until the shutdown signal fires.
    #[instrument(skip(self, shutdown_rx), fields(address = %self.bind_address))]
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.bind_address).await?;
        info!(address = %self.bind_address, "Exporter listening");

        axum::serve(listener, router(self.registry))
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }
}

async fn metrics(State(registry): State<Arc<ExpositionRegistry>>) -> Response {
    match registry.render().await {
        Ok(body) => ([(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode metrics").into_response()
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
