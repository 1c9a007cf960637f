//! Error types for the HTTP layer.
//!
//! [`AppError`] bridges domain outcomes to HTTP responses: not-found,
//! validation, and conflict are distinguishable outcomes with structured
//! `{code, message}` bodies, while internal failures are logged and reported
//! opaquely.

use crate::catalog::CatalogError;
use crate::inventory::SeatConflict;
use crate::types::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Application error for web handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A requested record has no match.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Kind of record looked up
        resource: &'static str,
        /// The identifier that had no match
        id: String,
    },

    /// A payload failed the validation boundary; nothing was applied.
    #[error("{0}")]
    Validation(String),

    /// A conditional write lost: the shared state changed underneath the
    /// caller.
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid admin credentials/session.
    #[error("{0}")]
    Unauthorized(String),

    /// An internal failure; details are logged, not exposed.
    #[error("an internal error occurred")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not-found error for a resource kind and id.
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create a validation error with a reported reason.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    /// Create a conflict error with a reported reason.
    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict(reason.into())
    }

    /// Create an unauthorized error with a reported reason.
    #[must_use]
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized(reason.into())
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Error code for client error handling.
    code: &'static str,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        }
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SeatConflict> for AppError {
    fn from(err: SeatConflict) -> Self {
        Self::Conflict(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_resource_and_id() {
        let err = AppError::not_found("Movie", "42");
        assert_eq!(err.to_string(), "Movie with id 42 not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let err = AppError::validation("duration must be a positive number of minutes");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err: AppError = SeatConflict {
            unavailable: vec![crate::types::SeatId::from("A1")],
        }
        .into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "seats no longer available: A1");
    }
}
