//! In-memory [`SubmissionStore`] used to exercise the HTTP layer without a
//! database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use contact_core::roles::DEFAULT_ROLES;
use contact_core::types::DbId;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::role::Role;
use crate::models::submission::{NewSubmission, Submission, SubmissionFields};
use crate::store::SubmissionStore;

#[derive(Default)]
struct Tables {
    /// Last identity handed out. Never decremented, so ids are not reused.
    last_id: DbId,
    submissions: BTreeMap<DbId, Submission>,
    roles: Vec<Role>,
}

/// Store backed by process memory. Contents are lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    /// until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn initialize(&self) -> StoreResult<()> {
        self.check_available()?;
        let mut tables = self.tables.lock().await;
        if tables.roles.is_empty() {
            tables.roles = DEFAULT_ROLES
                .iter()
                .zip(1..)
                .map(|(name, id)| Role {
                    id,
                    role_name: name.to_string(),
                })
                .collect();
        }
        Ok(())
    }

    async fn insert_submission(&self, input: &NewSubmission) -> StoreResult<DbId> {
        self.check_available()?;
        let mut tables = self.tables.lock().await;
        tables.last_id += 1;
        let id = tables.last_id;
        tables.submissions.insert(
            id,
            Submission {
                id,
                store: input.store.clone(),
                name: input.name.clone(),
                email: input.email.clone(),
                role: input.role.clone(),
                message: input.message.clone(),
                created_at: chrono::Utc::now(),
            },
        );
        Ok(id)
    }

    async fn list_submissions(&self) -> StoreResult<Vec<Submission>> {
        self.check_available()?;
        let tables = self.tables.lock().await;
        Ok(tables.submissions.values().cloned().collect())
    }

    async fn update_submission(&self, id: DbId, input: &SubmissionFields) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.lock().await;
        let Some(row) = tables.submissions.get_mut(&id) else {
            return Ok(false);
        };
        row.store = input.store.clone();
        row.name = input.name.clone();
        row.email = input.email.clone();
        row.message = input.message.clone();
        Ok(true)
    }

    async fn delete_submission(&self, id: DbId) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.lock().await;
        Ok(tables.submissions.remove(&id).is_some())
    }

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        self.check_available()?;
        let tables = self.tables.lock().await;
        let mut roles = tables.roles.clone();
        roles.sort_by(|a, b| a.role_name.cmp(&b.role_name));
        Ok(roles)
    }
}
