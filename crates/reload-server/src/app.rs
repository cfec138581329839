//! Router construction.
//!
//! Builds the demo application: the configuration API, a static file tree
//! served at `/`, hot reload, and the request plumbing around them.

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::ServerConfig;
use crate::handlers;
use crate::middleware::development::with_development;
use crate::middleware::hot_reload::with_hot_reload;

/// Create the application router.
///
/// # Arguments
///
/// * `config` - Server configuration
pub fn create_router(config: &ServerConfig) -> Router {
    let api_routes = Router::new().route("/api/config", get(handlers::config::get_config));

    let router = Router::new()
        .merge(api_routes)
        .fallback_service(ServeDir::new(&config.root));

    let router = with_hot_reload(router, config.reload.clone());
    let router = with_development(router, config.development);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CatchPanicLayer::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use axum::body::{Body, to_bytes};
    use axum::extract::Request;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn server_config(root: &std::path::Path, development: bool) -> ServerConfig {
        ServerConfig {
            addr: "127.0.0.1:0".to_owned(),
            root: root.to_path_buf(),
            development,
            reload: Config::default(),
        }
    }

    fn get_request(path: &str) -> Request {
        axum::http::Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_config_endpoint_reports_development() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_router(&server_config(dir.path(), true));

        let response = router.oneshot(get_request("/api/config")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["development"], true);
        assert_eq!(json["reloadPath"], "/ws/reload");
    }

    #[tokio::test]
    async fn test_config_endpoint_production() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_router(&server_config(dir.path(), false));

        let response = router.oneshot(get_request("/api/config")).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();

        assert_eq!(json["development"], false);
    }

    #[tokio::test]
    async fn test_serves_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>hello</h1>").unwrap();
        let router = create_router(&server_config(dir.path(), true));

        let response = router.oneshot(get_request("/index.html")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<h1>hello</h1>");
    }

    #[tokio::test]
    async fn test_reload_requires_upgrade() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_router(&server_config(dir.path(), true));

        let response = router.oneshot(get_request("/ws/reload")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UPGRADE_REQUIRED);
    }

    #[tokio::test]
    async fn test_embedded_script_wins_over_root() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_router(&server_config(dir.path(), true));

        let response = router
            .oneshot(get_request("/static/reload.js"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("/ws/reload"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_router(&server_config(dir.path(), true));

        let response = router.oneshot(get_request("/missing.html")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let router = create_router(&server_config(dir.path(), true));

        let response = router.oneshot(get_request("/api/config")).await.unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }
}
