//! WebSocket handler for hot reload.
//!
//! Answers every inbound data frame with the current session token.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};

use crate::config::{Config, IdGenerator};

/// Handler for the reload endpoint, for mounting on a route of your choice.
///
/// `config.next` is not consulted here; the skip predicate is applied by
/// [`with_hot_reload`](crate::with_hot_reload).
pub fn reload<S>(config: Config) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let id_generator = config.id_generator;
    get(move |ws: WebSocketUpgrade| {
        let id_generator = Arc::clone(&id_generator);
        async move { upgrade(ws, id_generator) }
    })
}

/// Extract the upgrade from a raw request and start the notifier.
pub(crate) async fn serve(request: Request, id_generator: IdGenerator) -> Response {
    match WebSocketUpgrade::from_request(request, &()).await {
        Ok(ws) => upgrade(ws, id_generator),
        Err(rejection) => rejection.into_response(),
    }
}

fn upgrade(ws: WebSocketUpgrade, id_generator: IdGenerator) -> Response {
    ws.on_upgrade(move |socket| notify(socket, id_generator))
}

/// Handle an established WebSocket connection.
///
/// Runs until the peer closes or the first receive or send fails. Errors end
/// this connection only and are not reported further.
async fn notify(mut socket: WebSocket, id_generator: IdGenerator) {
    tracing::debug!("Reload client connected");

    while let Some(Ok(message)) = socket.recv().await {
        match message {
            Message::Text(_) | Message::Binary(_) => {}
            // Control frames are answered by the transport
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => break,
        }

        let token = id_generator();
        if socket
            .send(Message::Text(token.to_string().into()))
            .await
            .is_err()
        {
            break;
        }
    }

    tracing::debug!("Reload client disconnected");
}
