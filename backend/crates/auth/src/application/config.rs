//! Auth Configuration

use platform::token::TokenAuthority;

/// Default token validity: 2 hours
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 2 * 3600;

/// Configuration for the auth feature.
#[derive(Clone)]
pub struct AuthConfig {
    /// Mints and verifies identity tokens
    pub token: TokenAuthority,
    /// Optional application-wide pepper mixed into password hashes
    password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token: TokenAuthority, password_pepper: Option<Vec<u8>>) -> Self {
        Self {
            token,
            password_pepper,
        }
    }

    /// Configuration for local development and tests: random token
    /// secret, default TTL, no pepper. Tokens do not survive restarts.
    pub fn development() -> Self {
        let secret: [u8; 32] = rand::random();
        Self {
            token: TokenAuthority::new(
                secret,
                std::time::Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            ),
            password_pepper: None,
        }
    }

    /// Pepper bytes for password hashing, if configured
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[SECRET]"),
            )
            .finish()
    }
}
