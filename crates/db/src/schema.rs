//! Idempotent schema creation and role seeding, run on every start.

use contact_core::roles::DEFAULT_ROLES;
use sqlx::PgPool;

use crate::repositories::RoleRepo;

const CREATE_FORM_SUBMISSIONS: &str = "\
CREATE TABLE IF NOT EXISTS form_submissions (
    id         BIGSERIAL PRIMARY KEY,
    store      VARCHAR(50)  NOT NULL,
    name       VARCHAR(100) NOT NULL,
    email      VARCHAR(100) NOT NULL,
    role       VARCHAR(100),
    message    TEXT         NOT NULL,
    created_at TIMESTAMPTZ  NOT NULL DEFAULT NOW()
)";

const CREATE_ROLE: &str = "\
CREATE TABLE IF NOT EXISTS role (
    id        BIGSERIAL PRIMARY KEY,
    role_name VARCHAR(100) NOT NULL UNIQUE
)";

/// Ensure both tables exist and seed the default roles into an empty `role`
/// table. Safe to call repeatedly.
pub async fn initialize(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_FORM_SUBMISSIONS).execute(pool).await?;
    sqlx::query(CREATE_ROLE).execute(pool).await?;

    if RoleRepo::count(pool).await? == 0 {
        let inserted = RoleRepo::seed(pool, &DEFAULT_ROLES).await?;
        tracing::info!(inserted, "Inserted default roles");
    }

    tracing::info!("Tables ensured");
    Ok(())
}
