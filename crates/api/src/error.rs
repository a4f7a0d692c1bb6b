//! Startup failure types.

use thiserror::Error;

/// Failures that prevent the server from coming up or keep it from serving.
///
/// None of these are retried; `main` logs them and exits non-zero.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The listener could not be bound (address in use, permission denied).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The global Prometheus recorder could not be installed.
    #[error("failed to install metrics recorder: {0}")]
    MetricsRecorder(#[from] metrics_exporter_prometheus::BuildError),
}

/// Result type for server startup.
pub type Result<T> = std::result::Result<T, StartupError>;
