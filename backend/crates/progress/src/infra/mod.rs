//! Infrastructure Layer
//!
//! Repository implementations: Postgres for production, in-memory for
//! tests and local development.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProgressRepository;
pub use postgres::PgProgressRepository;
