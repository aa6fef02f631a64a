//! Progress (Module Progress Tracking) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Module keys, typed progress documents, repository trait
//! - `application/` - Use cases (get progress, save progress)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - One progress document per account per module
//! - Full-document replace on save (last write wins)
//! - Schema validation before anything touches storage
//!
//! ## Security Model
//! - Every route requires a bearer token
//! - The token's account must match the account in the path

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::ProgressConfig;
pub use domain::document::ModuleProgress;
pub use domain::module_key::ModuleKey;
pub use error::{ProgressError, ProgressResult};
pub use infra::memory::InMemoryProgressRepository;
pub use infra::postgres::PgProgressRepository;
pub use presentation::router::{progress_router, progress_router_generic};
