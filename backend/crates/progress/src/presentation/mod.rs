//! Presentation Layer
//!
//! HTTP handlers, response DTOs, and router wiring.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{progress_router, progress_router_generic};
