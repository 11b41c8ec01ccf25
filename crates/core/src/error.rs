use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing or malformed. Always a client error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Any persistence-layer failure. The payload is for logs only.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
