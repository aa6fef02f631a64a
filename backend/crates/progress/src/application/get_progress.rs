//! Get Progress Use Case

use std::sync::Arc;

use kernel::id::AccountId;
use serde_json::Value;

use crate::application::config::ProgressConfig;
use crate::application::authorize;
use crate::domain::document::ModuleProgress;
use crate::domain::module_key::ModuleKey;
use crate::domain::repository::{ProgressRepository, StoredProgress};
use crate::error::{ProgressError, ProgressResult};

/// Reads one module's progress document for one account.
pub struct GetProgressUseCase<R> {
    repository: Arc<R>,
    config: Arc<ProgressConfig>,
}

impl<R: ProgressRepository> GetProgressUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<ProgressConfig>) -> Self {
        Self { repository, config }
    }

    /// Authorize and fetch.
    ///
    /// An account that has never saved this module gets the module's
    /// default document, never an error.
    pub async fn execute(
        &self,
        token: Option<&str>,
        account_id: AccountId,
        module: ModuleKey,
    ) -> ProgressResult<Value> {
        authorize(&self.config, token, account_id)?;

        match self.repository.fetch(account_id, module).await? {
            StoredProgress::NoAccount => Err(ProgressError::AccountNotFound),
            StoredProgress::Unsaved => Ok(ModuleProgress::default_for(module).into_value()),
            StoredProgress::Document(value) => Ok(value),
        }
    }
}
