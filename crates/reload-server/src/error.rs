//! Error types for the reload server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    /// Request to a WebSocket path without an upgrade handshake.
    #[error("Upgrade Required")]
    UpgradeRequired,

    /// Listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address as configured.
        addr: String,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ReloadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UpgradeRequired => StatusCode::UPGRADE_REQUIRED,
            Self::Bind { .. } | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
