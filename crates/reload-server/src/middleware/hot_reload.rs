//! Hot reload layer.
//!
//! One middleware wires everything in front of the application:
//!
//! ```text
//! request ──► /ws, /ws/*      not an upgrade ──► 426 Upgrade Required
//!             │               /ws/reload     ──► access gate ──► notifier
//!             │               other          ──► application
//!             ├─► /static/*   embedded asset ──► asset
//!             │               missing        ──► application
//!             └─► anything else              ──► application
//! ```

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};

use crate::config::Config;
use crate::error::ReloadError;
use crate::live_reload::{self, RELOAD_PATH, WS_PREFIX};
use crate::static_files::{self, STATIC_PREFIX};

/// Install the hot reload endpoint and static assets on `router`.
///
/// Requests the layer does not claim reach the router unchanged, so the
/// application keeps its own routes and fallback.
pub fn with_hot_reload<S>(router: Router<S>, config: Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(config, hot_reload))
}

/// Where a request is headed.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    /// The reload endpoint itself.
    Reload,
    /// Another path under the WebSocket prefix.
    Socket,
    /// A path inside the embedded bundle.
    Asset(String),
    /// Not ours.
    Application,
}

impl Target {
    fn of(path: &str) -> Self {
        if path == RELOAD_PATH {
            return Self::Reload;
        }
        if is_under(path, WS_PREFIX) {
            return Self::Socket;
        }
        match path
            .strip_prefix(STATIC_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(asset) if !asset.is_empty() => Self::Asset(asset.to_owned()),
            _ => Self::Application,
        }
    }
}

fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

async fn hot_reload(State(config): State<Config>, request: Request, next: Next) -> Response {
    let target = Target::of(request.uri().path());

    if matches!(target, Target::Reload | Target::Socket)
        && !live_reload::is_websocket_upgrade(request.headers())
    {
        return ReloadError::UpgradeRequired.into_response();
    }

    match target {
        Target::Reload => live_reload::gate(&config, request, next).await,
        Target::Asset(path) => match static_files::serve_asset(request.method(), &path) {
            Some(response) => response,
            None => next.run(request).await,
        },
        Target::Socket | Target::Application => next.run(request).await,
    }
}
