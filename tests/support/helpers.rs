// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use inkpost::application::ports::{markdown::MarkdownRenderer, time::Clock};
use inkpost::application::services::ApplicationServices;
use inkpost::domain::post::PostRepository;
use inkpost::infrastructure::markdown::PulldownMarkdownRenderer;
use inkpost::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::FixedClock;

pub fn build_services(
    repo: Arc<dyn PostRepository>,
    renderer: Arc<dyn MarkdownRenderer>,
    clock: Arc<dyn Clock>,
) -> ApplicationServices {
    ApplicationServices::new(repo, renderer, clock)
}

/// Services over `repo` with the real markdown renderer and a fixed clock.
pub fn default_services(repo: Arc<dyn PostRepository>) -> ApplicationServices {
    build_services(
        repo,
        Arc::new(PulldownMarkdownRenderer::default()),
        Arc::new(FixedClock::default()),
    )
}

pub fn make_test_router(repo: Arc<dyn PostRepository>) -> axum::Router {
    make_test_router_with_timeout(repo, Duration::from_secs(5))
}

pub fn make_test_router_with_timeout(
    repo: Arc<dyn PostRepository>,
    request_timeout: Duration,
) -> axum::Router {
    let state = HttpState {
        services: Arc::new(default_services(repo)),
    };
    build_router(state, request_timeout)
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Asserts an `ErrorResponse` body with the given status and reason phrase.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "body: {json}");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
