//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK whenever the process can run the
//! handler. Used by Kubernetes, ECS, systemd, and load balancers to verify the
//! service is alive. The no-cache header set is applied by the router around
//! these handlers, so GET, HEAD and POST responses carry identical headers.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use crate::config::CONTENT_TYPE_JSON;
use crate::health::HealthStatus;
use crate::state::AppState;

fn probe(state: &AppState) -> HealthStatus {
    let status = state.health.report();
    tracing::debug!(timestamp = %status.timestamp, mode = ?status.mode, "Health probe");
    status
}

/// Health check handler.
///
/// Returns the current status, timestamp and deployment mode as JSON.
/// This is a liveness probe - it only checks that the process can respond to HTTP.
#[instrument(name = "health::get", skip(state))]
pub async fn get(State(state): State<AppState>) -> impl IntoResponse {
    let status = probe(&state);
    (
        [(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))],
        Json(status),
    )
}

/// HEAD variant: same status and headers as `get`, no body.
#[instrument(name = "health::head", skip(state))]
pub async fn head(State(state): State<AppState>) -> impl IntoResponse {
    probe(&state);
    (
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))],
    )
}
