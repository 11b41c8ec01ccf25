//! The store contract handed to HTTP handlers.
//!
//! [`PgStore`] is the production implementation; [`crate::memory::MemoryStore`]
//! implements the same contract in memory. Neither retries: a failed call is
//! reported once and the caller decides what to do.

use async_trait::async_trait;
use contact_core::types::DbId;

use crate::error::StoreResult;
use crate::models::role::Role;
use crate::models::submission::{NewSubmission, Submission, SubmissionFields};
use crate::repositories::{RoleRepo, SubmissionRepo};
use crate::{schema, DbPool};

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Short backend name for log lines.
    fn backend(&self) -> &'static str;

    /// Create tables if needed and seed roles into an empty role table.
    async fn initialize(&self) -> StoreResult<()>;

    /// Insert a submission and return its new identity.
    async fn insert_submission(&self, input: &NewSubmission) -> StoreResult<DbId>;

    /// All submissions by ascending id. Empty when there are none.
    async fn list_submissions(&self) -> StoreResult<Vec<Submission>>;

    /// Overwrite the mutable fields of `id`. `Ok(false)` when no row matched.
    async fn update_submission(&self, id: DbId, input: &SubmissionFields) -> StoreResult<bool>;

    /// Physically remove `id`. `Ok(false)` when no row matched.
    async fn delete_submission(&self, id: DbId) -> StoreResult<bool>;

    /// All roles ordered by name.
    async fn list_roles(&self) -> StoreResult<Vec<Role>>;
}

/// PostgreSQL-backed store over a bounded connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn initialize(&self) -> StoreResult<()> {
        schema::initialize(&self.pool).await?;
        Ok(())
    }

    async fn insert_submission(&self, input: &NewSubmission) -> StoreResult<DbId> {
        Ok(SubmissionRepo::create(&self.pool, input).await?)
    }

    async fn list_submissions(&self) -> StoreResult<Vec<Submission>> {
        Ok(SubmissionRepo::list(&self.pool).await?)
    }

    async fn update_submission(&self, id: DbId, input: &SubmissionFields) -> StoreResult<bool> {
        Ok(SubmissionRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_submission(&self, id: DbId) -> StoreResult<bool> {
        Ok(SubmissionRepo::delete(&self.pool, id).await?)
    }

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        Ok(RoleRepo::list(&self.pool).await?)
    }
}
