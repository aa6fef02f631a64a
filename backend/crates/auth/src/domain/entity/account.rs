//! Account Entity
//!
//! One registered user: credentials plus the per-module progress map.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// Account entity
///
/// The `progress` field is a JSON object mapping module key to that
/// module's progress document. It is owned here so the credential row
/// and the progress map live in one record, but it is only ever mutated
/// through the progress feature crate.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Email (unique, alternative login identifier)
    pub email: Email,
    /// Argon2id password hash; never serialized outward
    pub password_hash: HashedPassword,
    /// Module key -> progress document
    pub progress: serde_json::Value,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with an empty progress map
    pub fn new(user_name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            user_name,
            email,
            password_hash,
            progress: serde_json::Value::Object(serde_json::Map::new()),
            created_at: now,
            updated_at: now,
        }
    }
}
