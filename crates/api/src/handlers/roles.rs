//! Handler for the read-only role list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::RoleListResponse;
use crate::state::AppState;

/// GET /api/roles
///
/// All roles, alphabetically by `role_name`.
pub async fn list_roles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let roles = state.store.list_roles().await?;

    tracing::debug!(count = roles.len(), "Roles listed");

    Ok(Json(RoleListResponse::new(roles)))
}
