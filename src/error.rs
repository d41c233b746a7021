// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors a chat request can surface. Each one renders as a JSON
/// `{ "error": "..." }` body so the UI can show it as a chat bubble.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Backend timeout")]
    BackendTimeout,

    #[error("{0}")]
    BackendUnreachable(String),

    /// The backend answered with a non-success status. The status is
    /// relayed to the caller together with the extracted message.
    #[error("{message}")]
    BackendRejected { status: StatusCode, message: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BackendTimeout | AppError::BackendUnreachable(_) => StatusCode::BAD_GATEWAY,
            AppError::BackendRejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
