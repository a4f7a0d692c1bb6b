//! HTTP server answering `GET /` with a static JSON message.
//!
//! Also exposes `/metrics` in Prometheus format, with structured logging
//! (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::StartupError;

/// Creates the Axum application router.
///
/// Unknown paths fall through to axum's default 404.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::message::get))
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Installs the process-wide Prometheus recorder and returns its handle.
pub fn install_metrics_recorder() -> error::Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Binds the TCP listener for `addr` and emits the startup notice.
pub async fn bind(addr: &str) -> error::Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    match listener.local_addr() {
        Ok(local) => tracing::info!(addr = %local, "server listening"),
        Err(_) => tracing::info!(%addr, "server listening"),
    }

    Ok(listener)
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> error::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}
