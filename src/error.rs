use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Request rejections that end in a non-200 status.
///
/// Anything that happens after the envelope is accepted (unknown drinks,
/// storage failures) is answered with a 200 chat message instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read request body")]
    UnreadableBody,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Cannot parse slash command")]
    MalformedCommand,

    #[error("Unknown command")]
    UnknownCommand,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnreadableBody | AppError::MalformedCommand | AppError::UnknownCommand => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidSignature => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
