//! In-Memory Progress Repository
//!
//! Used by tests and local development without a database. Holds the
//! same account-keyed progress map the `accounts` table does; accounts
//! must be registered before they can store anything, mirroring the
//! foreign nature of account creation (the auth feature owns it).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::AccountId;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::module_key::ModuleKey;
use crate::domain::repository::{ProgressRepository, StoredProgress};
use crate::error::{ProgressError, ProgressResult};

#[derive(Clone, Default)]
pub struct InMemoryProgressRepository {
    accounts: Arc<Mutex<HashMap<Uuid, Map<String, Value>>>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with an empty progress map, as signup would
    pub fn register_account(&self, account_id: AccountId) {
        if let Ok(mut accounts) = self.accounts.lock() {
            accounts.entry(account_id.into_uuid()).or_default();
        }
    }

    fn guard(&self) -> ProgressResult<MutexGuard<'_, HashMap<Uuid, Map<String, Value>>>> {
        self.accounts
            .lock()
            .map_err(|_| ProgressError::Internal("Progress store lock poisoned".to_string()))
    }
}

impl ProgressRepository for InMemoryProgressRepository {
    async fn fetch(
        &self,
        account_id: AccountId,
        module: ModuleKey,
    ) -> ProgressResult<StoredProgress> {
        let accounts = self.guard()?;

        Ok(match accounts.get(account_id.as_uuid()) {
            None => StoredProgress::NoAccount,
            Some(progress) => match progress.get(module.as_str()) {
                None => StoredProgress::Unsaved,
                Some(value) => StoredProgress::Document(value.clone()),
            },
        })
    }

    async fn store(
        &self,
        account_id: AccountId,
        module: ModuleKey,
        document: &Value,
    ) -> ProgressResult<bool> {
        let mut accounts = self.guard()?;

        match accounts.get_mut(account_id.as_uuid()) {
            None => Ok(false),
            Some(progress) => {
                progress.insert(module.as_str().to_string(), document.clone());
                Ok(true)
            }
        }
    }
}
