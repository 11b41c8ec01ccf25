//! Handlers for contact form submissions.
//!
//! Each handler validates its input, performs exactly one store call and maps
//! the outcome onto the response envelope. No handler retries.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use contact_core::error::CoreError;
use contact_core::types::DbId;
use contact_core::validation::parse_id;
use contact_db::models::submission::SubmissionPayload;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, SubmissionListResponse, SuccessResponse};
use crate::state::AppState;

const ENTITY: &str = "Submission";

/// POST /api/submit-form
///
/// Store a new submission. Identical bodies create distinct rows.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.inspect_err(|e| warn_rejected("submit", e))?;
    let input = payload
        .into_new_submission()
        .inspect_err(|e| warn_rejected("submit", e))?;

    let id = state.store.insert_submission(&input).await?;

    tracing::info!(id, store = %input.store, "Submission created");

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// GET /api/submissions
///
/// All submissions in ascending id order.
pub async fn list_submissions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let submissions = state.store.list_submissions().await?;

    tracing::debug!(count = submissions.len(), "Submissions listed");

    Ok(Json(SubmissionListResponse::new(submissions)))
}

/// PUT /api/submissions/{id}
///
/// Overwrite `store`, `name`, `email` and `message`. `id` and `created_at`
/// never change.
pub async fn update_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id).inspect_err(|e| warn_rejected("update", e))?;
    let Json(payload) = payload.inspect_err(|e| warn_rejected("update", e))?;
    let fields = payload
        .into_fields()
        .inspect_err(|e| warn_rejected("update", e))?;

    if !state.store.update_submission(id, &fields).await? {
        return Err(not_found("update", id));
    }

    tracing::info!(id, store = %fields.store, "Submission updated");

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/submissions/{id}
///
/// Permanently remove a submission. Deleting twice yields 404 the second time.
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id).inspect_err(|e| warn_rejected("delete", e))?;

    if !state.store.delete_submission(id).await? {
        return Err(not_found("delete", id));
    }

    tracing::info!(id, "Submission deleted");

    Ok(Json(SuccessResponse::ok()))
}

fn not_found(operation: &'static str, id: DbId) -> AppError {
    tracing::info!(operation, id, "Submission not found");
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn warn_rejected(operation: &'static str, error: &dyn std::fmt::Display) {
    tracing::warn!(operation, error = %error, "Request rejected");
}
