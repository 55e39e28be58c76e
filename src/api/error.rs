use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StoreError;
use crate::util::{FieldError, ValidationError};

// ============================================================================
// Error Types
// ============================================================================

/// Request failure, rendered as `{ "message": ... }` with a matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input; carries per-field details
    #[error("Invalid input")]
    Validation(Vec<FieldError>),

    /// Malformed input with no field breakdown (bad path IDs, missing IDs)
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate email or duplicate save
    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unexpected failure. The detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
            }
            other => {
                tracing::debug!(status = status.as_u16(), error = %other, "Request rejected");
            }
        }

        let body = ErrorBody {
            message: self.to_string(),
            errors: match &self {
                ApiError::Validation(errors) => Some(errors.as_slice()),
                _ => None,
            },
        };
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AccountNotFound(_) | StoreError::SavedLinkNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            StoreError::AlreadySaved { .. } | StoreError::EmailTaken(_) => {
                ApiError::Conflict(err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Path parameters that are not integers
pub(crate) fn invalid_path(message: &'static str) -> impl FnOnce(PathRejection) -> ApiError {
    move |rejection| {
        tracing::debug!(error = %rejection.body_text(), "Invalid path parameter");
        ApiError::BadRequest(message.to_string())
    }
}
