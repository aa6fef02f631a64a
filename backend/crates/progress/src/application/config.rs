//! Progress Configuration

use platform::token::TokenAuthority;

/// Configuration for the progress feature.
///
/// Shares the token secret with the auth feature so tokens minted at
/// login verify here without any cross-service call.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Verifies identity tokens on every request
    pub token: TokenAuthority,
}

impl ProgressConfig {
    pub fn new(token: TokenAuthority) -> Self {
        Self { token }
    }
}
