//! Configuration API endpoint.
//!
//! Tells the frontend whether to load the reload script and where it lives.

use axum::Json;
use serde::Serialize;

use crate::live_reload::RELOAD_PATH;
use crate::middleware::development::DevelopmentMode;
use crate::static_files::SCRIPT_PATH;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Whether the server runs in development mode.
    development: bool,
    /// WebSocket endpoint of the reload notifier.
    reload_path: &'static str,
    /// URL of the client script.
    script_path: &'static str,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(
    DevelopmentMode(development): DevelopmentMode,
) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        development,
        reload_path: RELOAD_PATH,
        script_path: SCRIPT_PATH,
    })
}
