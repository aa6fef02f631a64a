//! Save Progress Use Case

use std::sync::Arc;

use kernel::id::AccountId;
use serde_json::Value;

use crate::application::config::ProgressConfig;
use crate::application::authorize;
use crate::domain::document::ModuleProgress;
use crate::domain::module_key::ModuleKey;
use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};

/// Replaces one module's progress document for one account.
pub struct SaveProgressUseCase<R> {
    repository: Arc<R>,
    config: Arc<ProgressConfig>,
}

impl<R: ProgressRepository> SaveProgressUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<ProgressConfig>) -> Self {
        Self { repository, config }
    }

    /// Authorize, validate, and store the full document.
    ///
    /// Returns the stored value for confirmation. Validation happens
    /// before the write, so a rejected document mutates nothing.
    pub async fn execute(
        &self,
        token: Option<&str>,
        account_id: AccountId,
        module: ModuleKey,
        document: Value,
    ) -> ProgressResult<Value> {
        authorize(&self.config, token, account_id)?;

        let validated = ModuleProgress::from_value(module, document)?.into_value();

        let updated = self.repository.store(account_id, module, &validated).await?;
        if !updated {
            return Err(ProgressError::AccountNotFound);
        }

        tracing::info!(account_id = %account_id, module = %module, "Progress saved");

        Ok(validated)
    }
}
