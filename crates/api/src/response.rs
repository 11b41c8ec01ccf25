//! Response envelopes shared by all API handlers.
//!
//! Every `/api` response carries a top-level `success` flag. Successful
//! payloads sit next to it (`id`, `submissions`, `roles`); failures carry a
//! human-readable `message` and a machine-readable `code`.

use contact_core::types::DbId;
use contact_db::models::role::Role;
use contact_db::models::submission::Submission;
use serde::Serialize;

/// `{ "success": true }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "id": 1 }`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: DbId,
}

impl CreatedResponse {
    pub fn new(id: DbId) -> Self {
        Self { success: true, id }
    }
}

/// `{ "success": true, "submissions": [...] }`
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub success: bool,
    pub submissions: Vec<Submission>,
}

impl SubmissionListResponse {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            success: true,
            submissions,
        }
    }
}

/// `{ "success": true, "roles": [...] }`
#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub success: bool,
    pub roles: Vec<Role>,
}

impl RoleListResponse {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            success: true,
            roles,
        }
    }
}

/// `{ "success": false, "message": "...", "code": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub code: &'static str,
}

impl ErrorResponse {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code,
        }
    }
}
