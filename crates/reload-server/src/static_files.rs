//! Embedded static assets.
//!
//! Serves the `reload-assets` bundle under [`STATIC_PREFIX`].

use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};

/// URL prefix of the embedded bundle.
pub const STATIC_PREFIX: &str = "/static";

/// URL of the hot reload client script.
pub const SCRIPT_PATH: &str = "/static/reload.js";

/// Serve an embedded asset, `None` if it is not part of the bundle.
///
/// Only `GET` and `HEAD` are answered.
pub(crate) fn serve_asset(method: &Method, path: &str) -> Option<Response> {
    if *method != Method::GET && *method != Method::HEAD {
        return None;
    }

    let content = reload_assets::get(path)?;
    let mime = reload_assets::mime_for(path);

    Some(([(header::CONTENT_TYPE, mime)], content.into_owned()).into_response())
}
