//! Upgrade-only guard for WebSocket paths.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ReloadError;

/// Check whether the request asks for a WebSocket upgrade.
///
/// Both `Connection: upgrade` and `Upgrade: websocket` must be present.
/// Header values are comma-separated token lists, compared case-insensitively.
pub fn is_websocket_upgrade(headers: &HeaderMap) -> bool {
    contains_token(headers, &header::CONNECTION, "upgrade")
        && contains_token(headers, &header::UPGRADE, "websocket")
}

/// Middleware that rejects anything but WebSocket upgrades with 426.
pub async fn require_upgrade(request: Request, next: Next) -> Response {
    if is_websocket_upgrade(request.headers()) {
        next.run(request).await
    } else {
        ReloadError::UpgradeRequired.into_response()
    }
}

fn contains_token(headers: &HeaderMap, name: &HeaderName, token: &str) -> bool {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|part| part.trim().eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_plain_request_is_not_upgrade() {
        assert!(!is_websocket_upgrade(&HeaderMap::new()));
    }

    #[test]
    fn test_websocket_upgrade() {
        let map = headers(&[
            (header::CONNECTION, "Upgrade"),
            (header::UPGRADE, "websocket"),
        ]);

        assert!(is_websocket_upgrade(&map));
    }

    #[test]
    fn test_connection_token_list() {
        // Firefox sends "keep-alive, Upgrade"
        let map = headers(&[
            (header::CONNECTION, "keep-alive, Upgrade"),
            (header::UPGRADE, "WebSocket"),
        ]);

        assert!(is_websocket_upgrade(&map));
    }

    #[test]
    fn test_upgrade_to_other_protocol() {
        let map = headers(&[(header::CONNECTION, "upgrade"), (header::UPGRADE, "h2c")]);

        assert!(!is_websocket_upgrade(&map));
    }

    #[test]
    fn test_missing_connection_header() {
        let map = headers(&[(header::UPGRADE, "websocket")]);

        assert!(!is_websocket_upgrade(&map));
    }
}
