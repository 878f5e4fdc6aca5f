//! The JSON body shared by the API endpoints for reporting success or failure.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A `{"success": bool, "message": string}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Whether the request was handled successfully.
    pub success: bool,
    /// A human readable description of the outcome.
    pub message: String,
}

impl StatusMessage {
    /// A body with `success` set to `true`.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A body with `success` set to `false`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for StatusMessage {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
