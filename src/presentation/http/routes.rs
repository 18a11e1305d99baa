// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::posts,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::StatusCode,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    LatencyUnit,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub fn build_router(state: HttpState, request_timeout: Duration) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(posts::list_recent_posts))
        .route("/posts/{slug}", get(posts::get_post_by_slug))
        .route("/admin/posts", post(posts::create_post))
        .route("/admin/posts/{id}", get(posts::get_post_by_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(trace)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
