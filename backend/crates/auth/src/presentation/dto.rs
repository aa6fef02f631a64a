//! Request/Response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Requests
// ============================================================================

/// POST /signup request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// POST /login request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    /// User name or email address
    pub identifier: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Bearer token response for signup and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

/// GET /profile response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Module key -> progress document
    pub progress: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
