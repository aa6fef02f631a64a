//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, value objects, repository trait
//! - `application/` - Use cases (sign up, log in, profile)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Account signup with username + email + password
//! - Login by username or email, uniform failure response
//! - Stateless signed bearer tokens (HMAC-SHA256, fixed expiry)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Login never reveals whether the account exists
//! - Token secret is injected configuration, never hard-coded

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryAccountRepository;
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
