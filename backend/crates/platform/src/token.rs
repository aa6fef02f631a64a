//! Signed Identity Tokens
//!
//! Stateless bearer tokens proving an account's identity. A token is
//! `base64url(payload) . base64url(tag)` where the payload is a small
//! JSON document (`sub`, `iat`, `exp`) and the tag is an HMAC-SHA256
//! over the encoded payload.
//!
//! Verification is a pure function of the token and the signing secret:
//! no storage lookup, no revocation list. Expiry is the only lifecycle.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

/// Token verification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is structurally invalid (wrong shape, bad encoding)
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// Verified claims extracted from a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    /// Account the token was minted for
    pub account_id: Uuid,
    /// Issued-at, unix seconds
    pub issued_at: i64,
    /// Expiry, unix seconds
    pub expires_at: i64,
}

/// Wire format of the token payload
#[derive(Serialize, Deserialize)]
struct Payload {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// Mints and verifies identity tokens with a process-wide secret.
///
/// The secret is loaded once at startup and never rotated at runtime.
#[derive(Clone)]
pub struct TokenAuthority {
    secret: [u8; 32],
    ttl: std::time::Duration,
}

impl TokenAuthority {
    pub fn new(secret: [u8; 32], ttl: std::time::Duration) -> Self {
        Self { secret, ttl }
    }

    /// Token validity window
    pub fn ttl(&self) -> std::time::Duration {
        self.ttl
    }

    /// Mint a token for an account, valid for the configured TTL
    pub fn mint(&self, account_id: Uuid) -> String {
        self.mint_at(account_id, Utc::now())
    }

    fn mint_at(&self, account_id: Uuid, now: DateTime<Utc>) -> String {
        let issued_at = now.timestamp();
        let expires_at = issued_at + self.ttl.as_secs() as i64;

        let payload = Payload {
            sub: account_id,
            iat: issued_at,
            exp: expires_at,
        };

        let payload_json =
            serde_json::to_vec(&payload).expect("token payload serialization cannot fail");
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload_json);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let tag = mac.finalize().into_bytes();

        format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(tag))
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let (payload_b64, tag_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
        if payload_b64.is_empty() || tag_b64.contains('.') {
            return Err(TokenError::Malformed);
        }

        let tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| TokenError::Malformed)?;

        // Signature first, in constant time, before trusting the payload
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&tag)
            .map_err(|_| TokenError::InvalidSignature)?;

        let payload_json = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let payload: Payload =
            serde_json::from_slice(&payload_json).map_err(|_| TokenError::Malformed)?;

        if payload.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            account_id: payload.sub,
            issued_at: payload.iat,
            expires_at: payload.exp,
        })
    }
}

impl std::fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("secret", &"[SECRET]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use std::time::Duration;

    fn authority() -> TokenAuthority {
        TokenAuthority::new([7u8; 32], Duration::from_secs(2 * 3600))
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let authority = authority();
        let account_id = Uuid::new_v4();

        let token = authority.mint(account_id);
        let claims = authority.verify(&token).unwrap();

        assert_eq!(claims.account_id, account_id);
        assert_eq!(claims.expires_at - claims.issued_at, 2 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let authority = authority();
        let account_id = Uuid::new_v4();

        let minted_at = Utc::now() - ChronoDuration::hours(3);
        let token = authority.mint_at(account_id, minted_at);

        assert_eq!(authority.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_valid_until_expiry_boundary() {
        let authority = authority();
        let account_id = Uuid::new_v4();

        let minted_at = Utc::now();
        let token = authority.mint_at(account_id, minted_at);

        // One second before expiry: still valid
        let just_before = minted_at + ChronoDuration::seconds(2 * 3600 - 1);
        assert!(authority.verify_at(&token, just_before).is_ok());

        // At expiry: rejected
        let at_expiry = minted_at + ChronoDuration::seconds(2 * 3600);
        assert_eq!(
            authority.verify_at(&token, at_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let authority = authority();
        let other = TokenAuthority::new([8u8; 32], Duration::from_secs(2 * 3600));

        let token = authority.mint(Uuid::new_v4());

        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let authority = authority();
        let token = authority.mint(Uuid::new_v4());

        let (payload_b64, tag_b64) = token.split_once('.').unwrap();
        let other_payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&Payload {
                sub: Uuid::new_v4(),
                iat: 0,
                exp: i64::MAX,
            })
            .unwrap(),
        );
        assert_ne!(other_payload, payload_b64);

        let forged = format!("{}.{}", other_payload, tag_b64);
        assert_eq!(
            authority.verify(&forged),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let authority = authority();

        assert_eq!(authority.verify(""), Err(TokenError::Malformed));
        assert_eq!(authority.verify("no-dot-here"), Err(TokenError::Malformed));
        assert_eq!(authority.verify(".."), Err(TokenError::Malformed));
        assert_eq!(
            authority.verify("not base64!.also not base64!"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug_output = format!("{:?}", authority());
        assert!(debug_output.contains("[SECRET]"));
        assert!(!debug_output.contains("7, 7"));
    }
}
