#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use contact_db::memory::MemoryStore;
use contact_db::store::SubmissionStore;
use contact_db::{DbTarget, PoolSettings};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use contact_api::config::{CorsPolicy, ServerConfig};
use contact_api::router::build_app_router;
use contact_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database target is never dialled: tests run against [`MemoryStore`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors: CorsPolicy::AnyOrigin,
        request_timeout_secs: 30,
        static_dir: None,
        database: DbTarget::Url("postgres://localhost/contact_test".to_string()),
        pool: PoolSettings {
            max_connections: 1,
            acquire_timeout: Duration::from_secs(1),
        },
    }
}

/// Build an `AppState` over the given store and config.
pub fn test_state(store: Arc<MemoryStore>, config: ServerConfig) -> AppState {
    AppState {
        store,
        config: Arc::new(config),
    }
}

/// Build the full application router over an initialized in-memory store.
///
/// Returns the store too so tests can inspect it or switch it off.
pub async fn build_test_app() -> (Router, Arc<MemoryStore>) {
    build_test_app_with(test_config()).await
}

pub async fn build_test_app_with(config: ServerConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    store.initialize().await.unwrap();
    let app = build_app_router(test_state(Arc::clone(&store), config));
    (app, store)
}

/// Send a request with an optional JSON body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
