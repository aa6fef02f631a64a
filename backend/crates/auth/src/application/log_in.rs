//! Log In Use Case

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Raw login request data
pub struct LogInInput {
    /// User name or email address
    pub identifier: String,
    pub password: String,
}

/// Authenticates an account and mints a token.
pub struct LogInUseCase<R> {
    repository: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AccountRepository> LogInUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repository, config }
    }

    /// Verify credentials and mint a token.
    ///
    /// Every failure mode (unknown identifier, wrong password, malformed
    /// password) collapses into `InvalidCredentials` so the response
    /// reveals nothing about which part was wrong.
    pub async fn execute(&self, input: LogInInput) -> AuthResult<String> {
        let account = self
            .find_account(&input.identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !account
            .password_hash
            .verify(&password, self.config.pepper())
        {
            tracing::warn!(account_id = %account.account_id, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.config.token.mint(account.account_id.into_uuid()))
    }

    /// Identifiers containing `@` are treated as emails, everything else
    /// as a user name. User names cannot contain `@`, so there is no
    /// ambiguity.
    async fn find_account(&self, identifier: &str) -> AuthResult<Option<Account>> {
        let identifier = identifier.trim();

        if identifier.contains('@') {
            self.repository
                .find_by_email(&identifier.to_lowercase())
                .await
        } else {
            self.repository
                .find_by_user_name(&identifier.to_lowercase())
                .await
        }
    }
}
