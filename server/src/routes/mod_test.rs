use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = base_routes()
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================
// Full router
// =============================================================

fn config_with_upstream(api_upstream: Option<String>) -> ServerConfig {
    ServerConfig {
        bind_addr: crate::config::DEFAULT_BIND_ADDR,
        port: crate::config::DEFAULT_PORT,
        site_root: None,
        log_format: crate::config::LogFormat::Text,
        api_upstream,
    }
}

#[tokio::test]
async fn app_relays_session_check_to_upstream() {
    let upstream = Router::new().route("/api/auth/me", get(|| async { r#"{"id":"u1"}"# }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, upstream).await.unwrap() });

    let response = app(&config_with_upstream(Some(format!("http://{addr}"))))
        .unwrap()
        .oneshot(Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"id":"u1"}"#);
}

#[tokio::test]
async fn app_without_upstream_answers_503_for_api() {
    let response = app(&config_with_upstream(None))
        .unwrap()
        .oneshot(Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
