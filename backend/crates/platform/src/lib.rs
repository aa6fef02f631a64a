//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the feature crates:
//! - Password hashing (Argon2id, zeroized clear text)
//! - Signed identity tokens (HMAC-SHA256, stateless)
//! - Bearer credential extraction from HTTP headers

pub mod bearer;
pub mod password;
pub mod token;
