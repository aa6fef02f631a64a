//! Postgres Progress Repository
//!
//! Progress documents live in the `progress` JSONB column of the
//! `accounts` table, one key per module. Both operations are single
//! statements, so a document replace is atomic and readers never see a
//! half-written document.

use kernel::id::AccountId;
use serde_json::Value;
use sqlx::PgPool;

use crate::domain::module_key::ModuleKey;
use crate::domain::repository::{ProgressRepository, StoredProgress};
use crate::error::ProgressResult;

#[derive(Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProgressRepository for PgProgressRepository {
    async fn fetch(
        &self,
        account_id: AccountId,
        module: ModuleKey,
    ) -> ProgressResult<StoredProgress> {
        // Outer Option: does the account row exist.
        // Inner Option: does the progress map have this module's key.
        let row = sqlx::query_scalar::<_, Option<Value>>(
            "SELECT progress -> $2 FROM accounts WHERE account_id = $1",
        )
        .bind(account_id.into_uuid())
        .bind(module.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            None => StoredProgress::NoAccount,
            Some(None) => StoredProgress::Unsaved,
            Some(Some(value)) => StoredProgress::Document(value),
        })
    }

    async fn store(
        &self,
        account_id: AccountId,
        module: ModuleKey,
        document: &Value,
    ) -> ProgressResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET progress = jsonb_set(progress, ARRAY[$2::text], $3, true),
                updated_at = NOW()
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.into_uuid())
        .bind(module.as_str())
        .bind(document)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
