//! Error types for the folder HTTP service.
//!
//! [`ApiError`] is the single error type returned by handlers. Each variant
//! maps to a distinct response class and carries a machine-readable `code`:
//!
//! - `InvalidClientId`: `400 BadRequest`, names the rejected identifier.
//! - `MalformedBody`: `400 BadRequest`, the request body is not usable JSON.
//! - `NotFound`: `404 NotFound`, the client has no folders.
//! - `AlreadyExists`: `400 BadRequest`, the client already has folders.
//! - `Backend`: `500 InternalServer`, the backend failed; its message is
//!   passed through unchanged.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folder_manager::{BackendError, InvalidClientId};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidClientId(#[from] InvalidClientId),

    #[error("{0}")]
    MalformedBody(String),

    #[error("No folders found for client id '{client_id}'")]
    NotFound { client_id: String },

    #[error("client id '{client_id}' already exists")]
    AlreadyExists { client_id: String },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidClientId(_) | Self::MalformedBody(_) | Self::AlreadyExists { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category code reported in the response body.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidClientId(_) | Self::MalformedBody(_) | Self::AlreadyExists { .. } => {
                "BadRequest"
            }
            Self::NotFound { .. } => "NotFound",
            Self::Backend(_) => "InternalServer",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "{self}");
        } else {
            tracing::info!(code = self.code(), "{self}");
        }

        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
