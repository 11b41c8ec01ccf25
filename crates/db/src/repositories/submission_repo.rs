//! Repository for the `form_submissions` table.

use contact_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{NewSubmission, Submission, SubmissionFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, store, name, email, role, message, created_at";

/// Provides CRUD operations for form submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning its assigned ID.
    pub async fn create(pool: &PgPool, input: &NewSubmission) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO form_submissions (store, name, email, role, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.store)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.role)
        .bind(&input.message)
        .fetch_one(pool)
        .await
    }

    /// Find a submission by its ID.
    ///
    /// No endpoint reads a single row; this exists for the store's integration
    /// tests.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_submissions ORDER BY id ASC");
        sqlx::query_as::<_, Submission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable columns of a submission.
    ///
    /// Returns `true` if a row was updated. `id`, `role` and `created_at`
    /// are left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SubmissionFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE form_submissions SET store = $1, name = $2, email = $3, message = $4 \
             WHERE id = $5",
        )
        .bind(&input.store)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.message)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM form_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
