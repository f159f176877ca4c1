//! Shared response envelope types for API handlers.
//!
//! All API responses carry a `"success"` flag per project conventions; the
//! payload key varies by endpoint (`theme`, `definition`, `stats`, ...), so
//! handlers define their own typed envelopes and only the generic shapes
//! live here.

use serde::Serialize;

/// Standard `{ "success": true, "message": ... }` envelope for mutations
/// that return no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
