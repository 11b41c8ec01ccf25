use axum::routing::get;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Role routes mounted under `/api`.
///
/// ```text
/// GET    /roles               -> list_roles
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/roles", get(roles::list_roles))
}
