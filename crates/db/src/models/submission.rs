//! Form submission model and DTOs.

use contact_core::error::CoreError;
use contact_core::types::{DbId, Timestamp};
use contact_core::validation::{normalize_optional, require_non_empty};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `form_submissions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub store: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Validated input for inserting a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub store: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Informational only; not checked against the `role` table.
    pub role: Option<String>,
}

/// The four mutable columns, overwritten together by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFields {
    pub store: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Raw request body for submit and update.
///
/// Every field is optional at the wire level so a missing field becomes a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionPayload {
    pub store: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub role: Option<String>,
}

impl SubmissionPayload {
    /// Check the required fields and build an insert.
    pub fn into_new_submission(self) -> Result<NewSubmission, CoreError> {
        let role = normalize_optional(self.role.as_deref());
        let fields = self.into_fields()?;
        Ok(NewSubmission {
            store: fields.store,
            name: fields.name,
            email: fields.email,
            message: fields.message,
            role,
        })
    }

    /// Check the required fields and build an update. `role` is ignored.
    pub fn into_fields(self) -> Result<SubmissionFields, CoreError> {
        require_non_empty(&[
            ("store", self.store.as_deref()),
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("message", self.message.as_deref()),
        ])?;

        // Presence was checked above.
        Ok(SubmissionFields {
            store: self.store.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
