//! In-Memory Account Repository
//!
//! Used by tests and local development without a database. Mirrors the
//! Postgres repository's semantics, including the uniqueness rules the
//! real table enforces with constraints.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::AccountId;
use uuid::Uuid;

use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> AuthResult<MutexGuard<'_, HashMap<Uuid, Account>>> {
        self.accounts
            .lock()
            .map_err(|_| AuthError::Internal("Account store lock poisoned".to_string()))
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.guard()?;

        if accounts
            .values()
            .any(|a| a.user_name.canonical() == account.user_name.canonical())
        {
            return Err(AuthError::UserNameTaken);
        }
        if accounts
            .values()
            .any(|a| a.email.as_str() == account.email.as_str())
        {
            return Err(AuthError::EmailTaken);
        }

        accounts.insert(account.account_id.into_uuid(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: AccountId) -> AuthResult<Option<Account>> {
        Ok(self.guard()?.get(account_id.as_uuid()).cloned())
    }

    async fn find_by_user_name(&self, canonical: &str) -> AuthResult<Option<Account>> {
        Ok(self
            .guard()?
            .values()
            .find(|a| a.user_name.canonical() == canonical)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Account>> {
        Ok(self
            .guard()?
            .values()
            .find(|a| a.email.as_str() == email)
            .cloned())
    }

    async fn exists_by_user_name(&self, canonical: &str) -> AuthResult<bool> {
        Ok(self
            .guard()?
            .values()
            .any(|a| a.user_name.canonical() == canonical))
    }

    async fn exists_by_email(&self, email: &str) -> AuthResult<bool> {
        Ok(self.guard()?.values().any(|a| a.email.as_str() == email))
    }
}
