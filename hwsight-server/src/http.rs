//! HTTP endpoints for display clients.

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::service::TelemetryService;
use crate::source::SensorSource;

/// Path of the telemetry document.
pub const TELEMETRY_PATH: &str = "/system-info";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>HwSight</title></head>
<body>
<h1>HwSight telemetry server</h1>
<p>Server is running.</p>
<p>API endpoint: <a href="/system-info">/system-info</a></p>
</body>
</html>
"#;

/// Create the HTTP router.
pub fn create_router<S: SensorSource>(service: TelemetryService<S>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(TELEMETRY_PATH, get(telemetry_handler::<S>))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Handler for the telemetry endpoint.
///
/// Error documents are served with 200 as well; clients look for `error`.
async fn telemetry_handler<S: SensorSource>(
    State(service): State<TelemetryService<S>>,
) -> Response {
    Json(service.snapshot().await).into_response()
}

/// Landing page.
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for the /health endpoint.
async fn health_handler() -> Response {
    (StatusCode::OK, "healthy\n").into_response()
}

/// HTTP server configuration.
pub struct HttpServer<S> {
    service: TelemetryService<S>,
    listen_addr: SocketAddr,
}

impl<S: SensorSource> HttpServer<S> {
    /// Create a new HTTP server.
    pub fn new(service: TelemetryService<S>, listen_addr: SocketAddr) -> Self {
        Self {
            service,
            listen_addr,
        }
    }

    /// Bind the listen address and serve until the shutdown signal is received.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.listen_addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", self.listen_addr, e))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until the shutdown signal is received.
    pub async fn serve(
        self,
        listener: TcpListener,
        mut shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<()> {
        let addr = listener.local_addr()?;
        let router = create_router(self.service);

        info!(addr = %addr, path = TELEMETRY_PATH, "HTTP server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                loop {
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                    if *shutdown.borrow() {
                        break;
                    }
                }
                info!("HTTP server shutting down");
            })
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
