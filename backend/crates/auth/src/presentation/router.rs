//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create an auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .route("/profile", get(handlers::profile::<R>))
        .with_state(state)
}
