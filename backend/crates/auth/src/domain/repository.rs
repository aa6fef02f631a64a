//! Account Repository Trait

use kernel::id::AccountId;

use crate::domain::entity::Account;
use crate::error::AuthResult;

/// Persistence boundary for accounts.
///
/// `trait_variant` generates a `Send` variant (`AccountRepository`) used
/// by the application layer; the `Local` form exists for single-threaded
/// consumers.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find an account by its internal id
    async fn find_by_id(&self, account_id: AccountId) -> AuthResult<Option<Account>>;

    /// Find an account by canonical user name
    async fn find_by_user_name(&self, canonical: &str) -> AuthResult<Option<Account>>;

    /// Find an account by (lowercased) email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Account>>;

    /// Check whether a canonical user name is already taken
    async fn exists_by_user_name(&self, canonical: &str) -> AuthResult<bool>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> AuthResult<bool>;
}
