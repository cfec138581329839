//! Hot reload endpoint.
//!
//! Browsers connect to [`RELOAD_PATH`], send any frame and get the session
//! token back. The client script reloads the page when the token changes,
//! which happens when the server process restarts.

mod gate;
mod upgrade;
mod websocket;

pub(crate) use gate::gate;
pub use upgrade::{is_websocket_upgrade, require_upgrade};
pub use websocket::reload;

/// Path of the reload WebSocket endpoint.
pub const RELOAD_PATH: &str = "/ws/reload";

/// Prefix guarded by [`require_upgrade`].
pub const WS_PREFIX: &str = "/ws";
