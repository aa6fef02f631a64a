//! Postgres Account Repository

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{Email, UserName};
use crate::error::{AuthError, AuthResult};

/// Account repository backed by Postgres.
///
/// The `accounts` table also carries the `progress` JSONB column; this
/// repository reads it but never writes it.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the `accounts` table
#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    progress: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt password hash in storage: {e}")))?;

        Ok(Account {
            account_id: self.account_id.into(),
            user_name: UserName::from_db(self.user_name),
            email: Email::from_db(self.email),
            password_hash,
            progress: self.progress,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_ACCOUNT: &str = r#"
    SELECT account_id, user_name, email, password_hash, progress, created_at, updated_at
    FROM accounts
"#;

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts
                (account_id, user_name, user_name_canonical, email, password_hash,
                 progress, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.account_id.into_uuid())
        .bind(account.user_name.original())
        .bind(account.user_name.canonical())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(&account.progress)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: kernel::id::AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE account_id = $1"
        ))
        .bind(account_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_user_name(&self, canonical: &str) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE user_name_canonical = $1"
        ))
        .bind(canonical)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn exists_by_user_name(&self, canonical: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE user_name_canonical = $1)",
        )
        .bind(canonical)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
