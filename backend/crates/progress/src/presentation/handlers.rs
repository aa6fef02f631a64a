//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::AccountId;
use platform::bearer::extract_bearer;

use crate::application::config::ProgressConfig;
use crate::application::{GetProgressUseCase, SaveProgressUseCase};
use crate::domain::module_key::ModuleKey;
use crate::domain::repository::ProgressRepository;
use crate::error::{ProgressError, ProgressResult};
use crate::presentation::dto::SaveProgressResponse;

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressAppState<R>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ProgressConfig>,
}

/// The module segment is dynamic so one handler pair serves all four
/// modules; a segment that is not a module key is a 404, same as an
/// unknown route.
fn parse_module(raw: &str) -> ProgressResult<ModuleKey> {
    raw.parse().map_err(|_| ProgressError::UnknownModule)
}

// ============================================================================
// Get Progress
// ============================================================================

/// GET /{module}/{userId}
pub async fn get_progress<R>(
    State(state): State<ProgressAppState<R>>,
    Path((module, user_id)): Path<(String, Uuid)>,
    headers: HeaderMap,
) -> ProgressResult<Json<Value>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let module = parse_module(&module)?;

    let use_case = GetProgressUseCase::new(state.repo.clone(), state.config.clone());

    let document = use_case
        .execute(
            extract_bearer(&headers),
            AccountId::from_uuid(user_id),
            module,
        )
        .await?;

    Ok(Json(document))
}

// ============================================================================
// Save Progress
// ============================================================================

/// PUT /{module}/update/{userId}
pub async fn save_progress<R>(
    State(state): State<ProgressAppState<R>>,
    Path((module, user_id)): Path<(String, Uuid)>,
    headers: HeaderMap,
    Json(document): Json<Value>,
) -> ProgressResult<Json<SaveProgressResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let module = parse_module(&module)?;

    let use_case = SaveProgressUseCase::new(state.repo.clone(), state.config.clone());

    let stored = use_case
        .execute(
            extract_bearer(&headers),
            AccountId::from_uuid(user_id),
            module,
            document,
        )
        .await?;

    Ok(Json(SaveProgressResponse {
        message: "Progress updated".to_string(),
        module_progress: stored,
    }))
}
