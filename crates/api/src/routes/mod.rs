pub mod health;
pub mod roles;
pub mod submissions;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /submit-form                                     submit (POST)
/// /submissions                                     list (GET)
/// /submissions/{id}                                update (PUT), delete (DELETE)
/// /roles                                           list (GET)
/// ```
///
/// Any other path under `/api` answers with a JSON 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(submissions::router())
        .merge(roles::router())
        .fallback(handlers::api_not_found)
}
