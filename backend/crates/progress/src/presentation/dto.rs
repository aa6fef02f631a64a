//! Response DTOs
//!
//! Requests carry raw JSON documents (validated in the domain layer),
//! so only responses have fixed shapes here.

use serde::Serialize;
use serde_json::Value;

/// PUT /{module}/update/{userId} response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProgressResponse {
    pub message: String,
    /// The stored document, echoed back for confirmation
    pub module_progress: Value,
}
