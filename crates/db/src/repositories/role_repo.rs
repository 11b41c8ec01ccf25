//! Repository for the `role` table.

use sqlx::PgPool;

use crate::models::role::Role;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, role_name";

/// Provides read and seed operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles ordered by name, compared byte-wise.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM role ORDER BY role_name COLLATE \"C\" ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM role")
            .fetch_one(pool)
            .await
    }

    /// Insert the given role names, skipping any that already exist.
    ///
    /// Returns the number of rows actually inserted.
    pub async fn seed(pool: &PgPool, names: &[&str]) -> Result<u64, sqlx::Error> {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let result = sqlx::query(
            "INSERT INTO role (role_name) \
             SELECT * FROM UNNEST($1::TEXT[]) \
             ON CONFLICT (role_name) DO NOTHING",
        )
        .bind(names)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
