//! Profile Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::config::AuthConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Resolves a bearer token to the account it identifies.
pub struct ProfileUseCase<R> {
    repository: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AccountRepository> ProfileUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repository, config }
    }

    /// Verify the token and load the account.
    ///
    /// A valid token for a deleted account yields `AccountNotFound`,
    /// not an auth failure: the token itself checked out.
    pub async fn execute(&self, token: &str) -> AuthResult<Account> {
        let claims = self.config.token.verify(token)?;

        self.repository
            .find_by_id(AccountId::from_uuid(claims.account_id))
            .await?
            .ok_or(AuthError::AccountNotFound)
    }
}
