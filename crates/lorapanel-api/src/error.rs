//! Error types for the API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the same shape as a success message: `{"message": ...}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lorapanel_db::DbError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed to parse or is missing required fields.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The sensor name is already registered.
    #[error("{0}")]
    Conflict(String),

    /// The referenced sensor is not registered.
    #[error("{0}")]
    NotFound(String),

    /// The store could not complete the operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// A handler panicked while serving the request.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::Conflict(_) | Self::NotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::SensorAlreadyExists(_) => Self::Conflict(err.to_string()),
            DbError::UnknownSensor(_) => Self::NotFound(err.to_string()),
            DbError::Mongo(_) | DbError::Timeout { .. } | DbError::Config(_) => {
                Self::Storage(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = serde_json::json!({
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
