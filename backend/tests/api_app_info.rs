//! Router-level tests for the public landing page API

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use backend::{build_router, config::AppConfig, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn router_with(config: AppConfig) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

fn configured() -> AppConfig {
    AppConfig {
        github_app_slug: Some("codeboss-review".to_string()),
        ..AppConfig::default()
    }
}

async fn get(app: Router, uri: &str, origin: Option<&str>) -> axum::response::Response {
    let mut request = Request::builder().uri(uri);
    if let Some(origin) = origin {
        request = request.header(header::ORIGIN, origin);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .expect("router is infallible")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let response = get(router_with(AppConfig::default()), "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn app_info_returns_installation_url() {
    let response = get(router_with(configured()), "/api/github-app-info", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body["installation_url"],
        "https://github.com/apps/codeboss-review/installations/new"
    );
    assert_eq!(body["app_slug"], "codeboss-review");
}

#[tokio::test]
async fn app_info_prefers_explicit_url() {
    let config = AppConfig {
        install_url_override: Some("https://example.com/install".to_string()),
        ..AppConfig::default()
    };
    let body = json_body(get(router_with(config), "/api/github-app-info", None).await).await;
    assert_eq!(body["installation_url"], "https://example.com/install");
    assert!(body.get("app_slug").is_none());
}

#[tokio::test]
async fn app_info_unconfigured_is_service_unavailable() {
    let response = get(router_with(AppConfig::default()), "/api/github-app-info", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert!(body.get("installation_url").is_none());
    assert!(body["error"].as_str().unwrap().contains("GITHUB_APP_SLUG"));
}

#[tokio::test]
async fn cors_allows_known_frontend_origin() {
    let response = get(
        router_with(configured()),
        "/api/github-app-info",
        Some("http://localhost:3000"),
    )
    .await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn cors_ignores_unknown_origin() {
    let response = get(
        router_with(configured()),
        "/api/github-app-info",
        Some("https://evil.example"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn unknown_route_is_not_found_without_static_dir() {
    let response = get(router_with(configured()), "/api/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn static_site(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("codeboss-site-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    std::fs::write(dir.join("index.html"), "<html><body>landing</body></html>").unwrap();
    std::fs::write(dir.join("assets").join("eye.svg"), "<svg></svg>").unwrap();
    dir
}

fn router_serving(dir: &std::path::Path) -> Router {
    router_with(AppConfig {
        static_dir: Some(dir.to_string_lossy().into_owned()),
        ..configured()
    })
}

#[tokio::test]
async fn static_dir_serves_index_for_root_and_client_routes() {
    let dir = static_site("spa");

    for uri in ["/", "/pricing", "/some/deep/link"] {
        let response = get(router_serving(&dir), uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{} should render the landing page", uri);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&bytes).contains("landing"));
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn static_dir_keeps_assets_and_api_routes() {
    let dir = static_site("assets");

    let asset = get(router_serving(&dir), "/assets/eye.svg", None).await;
    assert_eq!(asset.status(), StatusCode::OK);
    let bytes = asset.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<svg></svg>");

    let info = get(router_serving(&dir), "/api/github-app-info", None).await;
    assert_eq!(info.status(), StatusCode::OK);

    std::fs::remove_dir_all(&dir).ok();
}
