pub mod roles;
pub mod submissions;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::ErrorResponse;

/// Fallback for unknown `/api` paths, so API clients always get the JSON
/// envelope instead of the frontend page.
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "Not found")),
    )
}
