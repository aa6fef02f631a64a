//! Presentation Layer
//!
//! HTTP handlers, request/response DTOs, and router wiring.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{auth_router, auth_router_generic};
