//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests use the exact same middleware stack.

use std::any::Any;
use std::path::Path;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use contact_core::error::CoreError;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{CorsPolicy, ServerConfig};
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`]: health check, `/api` routes, the
/// optional frontend fallback and all middleware layers.
pub fn build_app_router(state: AppState) -> Router {
    let mut routes = Router::new()
        // Health check at root level (not under /api).
        .merge(routes::health::router())
        .nest("/api", routes::api_routes());

    if let Some(dir) = &state.config.static_dir {
        routes = routes.fallback_service(spa_service(dir));
    }

    with_middleware(routes, state)
}

/// Apply the middleware stack and state to a route tree.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return the 500 envelope)
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let request_id_header = HeaderName::from_static("x-request-id");

    routes
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS middleware layer from server configuration.
///
/// Origins were validated when the configuration was loaded. Credentials are
/// never allowed, which keeps `*` legal.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match &config.cors {
        CorsPolicy::AnyOrigin => AllowOrigin::any(),
        CorsPolicy::AllowList(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

/// Serve files from `dir`, answering unknown paths with its `index.html` so
/// the client-side router can take over.
fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Convert a handler panic into the same 500 envelope a store failure gets.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::Core(CoreError::StoreUnavailable(format!("handler panicked: {detail}")))
        .into_response()
}
