//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::{
    LogInInput, LogInUseCase, ProfileUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LogInRequest, ProfileResponse, SignUpRequest, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: output.token,
        }),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.config.clone());

    let input = LogInInput {
        identifier: req.identifier,
        password: req.password,
    };

    let token = use_case.execute(input).await?;

    Ok(Json(TokenResponse { token }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /profile
pub async fn profile<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<ProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers).ok_or(AuthError::MissingToken)?;

    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());

    let account = use_case.execute(token).await?;

    Ok(Json(ProfileResponse {
        id: account.account_id.into_uuid(),
        username: account.user_name.original().to_string(),
        email: account.email.as_str().to_string(),
        progress: account.progress,
        created_at: account.created_at,
    }))
}
