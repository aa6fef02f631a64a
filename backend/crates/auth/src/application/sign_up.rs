//! Sign Up Use Case

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{Email, UserName};
use crate::error::{AuthError, AuthResult};

/// Raw signup request data, validated here
pub struct SignUpInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful signup
pub struct SignUpOutput {
    pub token: String,
    pub account_id: AccountId,
}

/// Registers a new account and mints its first token.
pub struct SignUpUseCase<R> {
    repository: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AccountRepository> SignUpUseCase<R> {
    pub fn new(repository: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repository, config }
    }

    /// Validate input, reject duplicates, hash the password, persist the
    /// account, and mint a token.
    ///
    /// Uniqueness is checked up front for friendly errors; the database
    /// unique constraints remain the real guarantee under concurrency.
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        let password = ClearTextPassword::new(input.password)?;

        if self
            .repository
            .exists_by_user_name(user_name.canonical())
            .await?
        {
            return Err(AuthError::UserNameTaken);
        }

        if self.repository.exists_by_email(email.as_str()).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password.hash(self.config.pepper())?;

        let account = Account::new(user_name, email, password_hash);
        let account_id = account.account_id;

        self.repository.create(&account).await?;

        tracing::info!(account_id = %account_id, "Account created");

        let token = self.config.token.mint(account_id.into_uuid());

        Ok(SignUpOutput { token, account_id })
    }
}
