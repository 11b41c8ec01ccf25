//! Route definitions for contact form submissions.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Submission routes mounted under `/api`.
///
/// ```text
/// POST   /submit-form         -> submit_form
/// GET    /submissions         -> list_submissions
/// PUT    /submissions/{id}    -> update_submission
/// DELETE /submissions/{id}    -> delete_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-form", post(submissions::submit_form))
        .route("/submissions", get(submissions::list_submissions))
        .route(
            "/submissions/{id}",
            put(submissions::update_submission).delete(submissions::delete_submission),
        )
}
