//! HTTP route handlers and router assembly.
//!
//! Routes carry per-group response headers. The health endpoint is wrapped in
//! the full no-cache header set; the demo page and static assets get short
//! public cache durations.
//!
//! The health path is owned by exactly one routing layer, chosen by
//! `http.health_binding`. Every request passes through the request ID
//! middleware, which creates a span used to correlate its logs.

pub mod example;
pub mod health;

use axum::{
    extract::OriginalUri,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::header::{HeaderName, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use http::StatusCode;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::config::{
    HealthBinding, API_BASE_PATH, CACHE_CONTROL_NO_STORE, CACHE_CONTROL_PAGE,
    CACHE_CONTROL_STATIC, EXPIRES_IMMEDIATELY, HEALTH_PATH, HEALTH_ROUTE, PRAGMA_NO_CACHE,
    SURROGATE_CONTROL_NO_STORE,
};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Wrap routes in the headers that forbid every cache layer from storing them.
fn no_cache(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PRAGMA,
            HeaderValue::from_static(PRAGMA_NO_CACHE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            EXPIRES,
            HeaderValue::from_static(EXPIRES_IMMEDIATELY),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("surrogate-control"),
            HeaderValue::from_static(SURROGATE_CONTROL_NO_STORE),
        ))
}

/// Health routes for the given binding.
///
/// `Native` registers the full path on the root router. `ApiRouter` builds a
/// sub-router mounted at the API prefix, which also accepts POST.
fn health_routes(binding: HealthBinding) -> Router<AppState> {
    match binding {
        HealthBinding::Native => no_cache(
            Router::new().route(HEALTH_PATH, get(health::get).head(health::head)),
        ),
        HealthBinding::ApiRouter => {
            let api = no_cache(Router::new().route(
                HEALTH_ROUTE,
                get(health::get).head(health::head).post(health::get),
            ));
            Router::new().nest(API_BASE_PATH, api)
        }
    }
}

/// Fallback for unmatched paths.
///
/// API paths get a bare 404; everything else gets the HTML error page.
async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    if path == API_BASE_PATH || path.starts_with(&format!("{}/", API_BASE_PATH)) {
        StatusCode::NOT_FOUND.into_response()
    } else {
        AppError::NotFound(path.to_string()).into_response()
    }
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let binding = state.config.http.health_binding;
    tracing::debug!(%binding, path = HEALTH_PATH, "Registering health route");

    // Demo page - short public cache, form submissions override with no-store
    let example_routes = Router::new()
        .route("/example", get(example::page).post(example::submit))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ));

    // Static files - counter script and stylesheet
    let static_routes = Router::new()
        .nest_service("/static", ServeDir::new(&state.config.http.static_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(health_routes(binding))
        .merge(example_routes)
        .merge(static_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
