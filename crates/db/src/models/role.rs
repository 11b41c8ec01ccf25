//! Role entity model.

use contact_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `role` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub role_name: String,
}
