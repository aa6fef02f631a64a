//! Progress Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Progress-specific result type alias
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Progress-specific error variants
#[derive(Debug, Error)]
pub enum ProgressError {
    /// Path names a module that does not exist
    #[error("Unknown module")]
    UnknownModule,

    /// Account in the path does not exist
    #[error("Account not found")]
    AccountNotFound,

    /// Submitted document does not match the module's schema
    #[error("{0}")]
    InvalidDocument(String),

    /// Bearer token missing from the request
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token malformed, expired, or badly signed
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token is valid but belongs to a different account than the path
    #[error("Token does not match requested account")]
    WrongAccount,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProgressError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProgressError::UnknownModule | ProgressError::AccountNotFound => StatusCode::NOT_FOUND,
            ProgressError::InvalidDocument(_) => StatusCode::BAD_REQUEST,
            ProgressError::MissingToken
            | ProgressError::InvalidToken
            | ProgressError::WrongAccount => StatusCode::UNAUTHORIZED,
            ProgressError::Database(_) | ProgressError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgressError::UnknownModule | ProgressError::AccountNotFound => ErrorKind::NotFound,
            ProgressError::InvalidDocument(_) => ErrorKind::BadRequest,
            ProgressError::MissingToken
            | ProgressError::InvalidToken
            | ProgressError::WrongAccount => ErrorKind::Unauthorized,
            ProgressError::Database(_) | ProgressError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server-side failures get a generic message;
    /// the detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProgressError::Database(_) | ProgressError::Internal(_) => {
                AppError::new(self.kind(), "Server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProgressError::Database(e) => {
                tracing::error!(error = %e, "Progress database error");
            }
            ProgressError::Internal(msg) => {
                tracing::error!(message = %msg, "Progress internal error");
            }
            ProgressError::WrongAccount => {
                tracing::warn!("Token/path account mismatch");
            }
            _ => {
                tracing::debug!(error = %self, "Progress error");
            }
        }
    }
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::token::TokenError> for ProgressError {
    fn from(_: platform::token::TokenError) -> Self {
        ProgressError::InvalidToken
    }
}
