//! Access gate for the reload endpoint.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::websocket;
use crate::config::Config;

/// Run the reload handler unless the skip predicate bypasses the request.
///
/// A skipped request continues down the chain to the wrapped application.
pub(crate) async fn gate(config: &Config, request: Request, next: Next) -> Response {
    if config.should_skip(&request) {
        tracing::debug!(path = %request.uri().path(), "Reload endpoint skipped");
        return next.run(request).await;
    }

    websocket::serve(request, Arc::clone(&config.id_generator)).await
}
