use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contact_core::error::CoreError;
use contact_db::error::StoreError;

use crate::response::ErrorResponse;

/// Client-facing message for every persistence failure. Driver errors are
/// logged, never returned.
pub const STORE_ERROR_MESSAGE: &str = "Database error";

/// Client-facing message for any body that is not a JSON object of strings.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for failed store
/// calls. Implements [`IntoResponse`] to produce the JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `contact_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        AppError::Core(CoreError::InvalidInput(INVALID_JSON_MESSAGE.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
                }
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::StoreUnavailable(detail) => {
                    tracing::error!(error = %detail, "Store unavailable");
                    store_unavailable()
                }
            },

            AppError::Store(err) => {
                tracing::error!(
                    error = %err,
                    pool_timeout = err.is_pool_timeout(),
                    "Store operation failed",
                );
                store_unavailable()
            }
        };

        (status, axum::Json(ErrorResponse::new(code, message))).into_response()
    }
}

fn store_unavailable() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORE_UNAVAILABLE",
        STORE_ERROR_MESSAGE.to_string(),
    )
}
