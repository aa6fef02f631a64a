//! Application Layer
//!
//! Use cases orchestrating the domain: signup, login, profile.

pub mod config;
pub mod log_in;
pub mod profile;
pub mod sign_up;

pub use config::AuthConfig;
pub use log_in::{LogInInput, LogInUseCase};
pub use profile::ProfileUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
