use contact_core::error::CoreError;

/// Failure of a store operation.
///
/// The variants exist for logging; callers treat all of them as the store
/// being unavailable.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A query, connection or pool error from sqlx (including pool timeouts).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backend refused the call for a reason other than a sqlx error.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Whether the call failed waiting for a pooled connection.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(self, StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::StoreUnavailable(err.to_string())
    }
}
