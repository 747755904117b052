use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Request-level error taxonomy and its HTTP mapping.
///
/// Validation, NotFound and Conflict carry a human-readable reason that is
/// sent to the client verbatim. Internal keeps the underlying fault for
/// the log and sends a generic message instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{field} {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("An unexpected error occurred")]
    Internal(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            StoreError::DuplicateEmployeeId(_)
            | StoreError::DuplicateEmail(_)
            | StoreError::DuplicateEmployee
            | StoreError::DuplicateAttendance { .. } => ApiError::Conflict(e.to_string()),
            StoreError::Sqlx(_) => ApiError::Internal(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(source) = self {
            error!(error = %source, "Request failed on an internal fault");
        }

        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
