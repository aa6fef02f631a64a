//! Progress Repository Trait

use kernel::id::AccountId;
use serde_json::Value;

use crate::domain::module_key::ModuleKey;
use crate::error::ProgressResult;

/// What a fetch found for an `(account, module)` pair
#[derive(Debug, Clone, PartialEq)]
pub enum StoredProgress {
    /// No account with that id
    NoAccount,
    /// Account exists but has never saved this module
    Unsaved,
    /// The saved document, as stored
    Document(Value),
}

/// Persistence boundary for per-module progress documents.
///
/// Documents live inside the account record, one slot per module key;
/// `store` replaces the slot atomically (last write wins).
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Fetch the stored document for one module of one account
    async fn fetch(&self, account_id: AccountId, module: ModuleKey)
    -> ProgressResult<StoredProgress>;

    /// Replace the document for one module of one account.
    ///
    /// Returns `false` if the account does not exist; nothing is
    /// written in that case.
    async fn store(
        &self,
        account_id: AccountId,
        module: ModuleKey,
        document: &Value,
    ) -> ProgressResult<bool>;
}
