//! Domain Layer
//!
//! Module keys, progress document schemas, and the repository trait.

pub mod document;
pub mod module_key;
pub mod repository;
