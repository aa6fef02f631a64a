//! Application Layer
//!
//! Use cases for reading and saving module progress.

pub mod config;
pub mod get_progress;
pub mod save_progress;

pub use config::ProgressConfig;
pub use get_progress::GetProgressUseCase;
pub use save_progress::SaveProgressUseCase;

use kernel::id::AccountId;

use crate::error::{ProgressError, ProgressResult};

/// Common authorization gate for every progress operation.
///
/// The token must be present, verify against the shared secret, and
/// identify the same account the path names. A valid token for a
/// different account is indistinguishable from no token at all (401),
/// so the API leaks nothing about other accounts' data.
pub(crate) fn authorize(
    config: &ProgressConfig,
    token: Option<&str>,
    account_id: AccountId,
) -> ProgressResult<()> {
    let token = token.ok_or(ProgressError::MissingToken)?;
    let claims = config.token.verify(token)?;

    if claims.account_id != account_id.into_uuid() {
        return Err(ProgressError::WrongAccount);
    }

    Ok(())
}
