use std::sync::Arc;

use contact_db::store::SubmissionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Submission store. Production wires a `PgStore`; tests a `MemoryStore`.
    pub store: Arc<dyn SubmissionStore>,
    /// Server configuration, resolved once at startup.
    pub config: Arc<ServerConfig>,
}
