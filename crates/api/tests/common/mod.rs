#![allow(dead_code)]

//! Shared harness for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) over a freshly seeded in-memory store, and provides small
//! request helpers driving it via `tower::ServiceExt`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use hms_api::config::ServerConfig;
use hms_api::gateway::notify::LoggingDispatcher;
use hms_api::gateway::payment::MockPaymentGateway;
use hms_api::router::build_app_router;
use hms_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        external_call_timeout_secs: 5,
    }
}

/// Build the full application router over a freshly seeded store.
///
/// Each call returns an independent application: tests never share state.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        db: Arc::new(hms_db::MemDb::seeded()),
        config: Arc::new(config.clone()),
        payments: Arc::new(MockPaymentGateway),
        notifier: Arc::new(LoggingDispatcher),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

/// Send a DELETE request.
pub async fn delete(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

/// Collect a response body as a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
