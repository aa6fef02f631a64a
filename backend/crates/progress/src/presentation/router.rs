//! Progress Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::application::config::ProgressConfig;
use crate::domain::repository::ProgressRepository;
use crate::infra::postgres::PgProgressRepository;
use crate::presentation::handlers::{self, ProgressAppState};

/// Create the progress router with the PostgreSQL repository
pub fn progress_router(repo: PgProgressRepository, config: ProgressConfig) -> Router {
    progress_router_generic(repo, config)
}

/// Create a progress router for any repository implementation
pub fn progress_router_generic<R>(repo: R, config: ProgressConfig) -> Router
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let state = ProgressAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/{module}/{user_id}", get(handlers::get_progress::<R>))
        .route(
            "/{module}/update/{user_id}",
            put(handlers::save_progress::<R>),
        )
        .with_state(state)
}
