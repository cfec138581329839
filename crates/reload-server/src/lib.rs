//! Hot reload middleware for axum.
//!
//! Browsers open a WebSocket to `/ws/reload`, send any frame and receive the
//! session token as a text frame. The token is generated once per process,
//! so the client script (`/static/reload.js`) reloads the page when the
//! server restarts with a new build.
//!
//! # Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use reload_server::{Config, with_development, with_hot_reload};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new();
//!     let app = with_hot_reload(app, Config::default());
//!     let app = with_development(app, true);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router
//!                        │
//!                        ├─► /ws/*      upgrade guard ──► access gate ──► notifier
//!                        │
//!                        ├─► /static/*  embedded assets (reload-assets)
//!                        │
//!                        └─► application routes (development flag set per request)
//! ```

mod app;
mod config;
mod error;
mod handlers;
mod live_reload;
mod middleware;
mod static_files;
mod token;

use std::path::PathBuf;

use tokio::net::TcpListener;

pub use app::create_router;
pub use config::{Config, IdGenerator, SkipFn};
pub use error::ReloadError;
pub use live_reload::{RELOAD_PATH, WS_PREFIX, is_websocket_upgrade, reload, require_upgrade};
pub use middleware::development::{
    DevelopmentMode, development_context, set_development_context, with_development,
};
pub use middleware::hot_reload::with_hot_reload;
pub use static_files::{SCRIPT_PATH, STATIC_PREFIX};
pub use token::SessionToken;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to bind to (`host:port`).
    pub addr: String,
    /// Directory served at `/`.
    pub root: PathBuf,
    /// Value of the per-request development flag.
    pub development: bool,
    /// Hot reload configuration.
    pub reload: Config,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3000".to_owned(),
            root: PathBuf::from("."),
            development: false,
            reload: Config::default(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or serving fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ReloadError> {
    let app = create_router(&config);

    let listener = TcpListener::bind(&config.addr)
        .await
        .map_err(|source| ReloadError::Bind {
            addr: config.addr.clone(),
            source,
        })?;
    let addr = listener.local_addr()?;
    tracing::info!(
        address = %addr,
        token = %config.reload.token(),
        development = config.development,
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
