//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::domain::{EntityKind, ValidationErrors};

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request that never reached validation.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// One or more input fields are invalid.
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// A supplied foreign key does not resolve to an existing parent.
    #[error("{entity} with id {id} does not exist")]
    ReferenceNotFound {
        /// Kind of the referenced parent.
        entity: EntityKind,
        /// The dangling key.
        id: i64,
    },

    /// Unique constraint violation.
    #[error("A user with {field} '{value}' already exists")]
    DuplicateKey {
        /// Name of the unique field.
        field: &'static str,
        /// The conflicting value.
        value: String,
    },

    /// Requested entity id is absent.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Kind of the requested entity.
        entity: EntityKind,
        /// The requested key.
        id: i64,
    },

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for [`AppError::NotFound`].
    #[must_use]
    pub const fn not_found(entity: EntityKind, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Shorthand for [`AppError::ReferenceNotFound`].
    #[must_use]
    pub const fn missing_reference(entity: EntityKind, id: i64) -> Self {
        Self::ReferenceNotFound { entity, id }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::Validation(_) => ErrorCode::VALIDATION_FAILED,
            Self::ReferenceNotFound { .. } => ErrorCode::REFERENCE_NOT_FOUND,
            Self::DuplicateKey { .. } => ErrorCode::DUPLICATE_KEY,
            Self::NotFound { .. } | Self::RouteNotFound(_) => ErrorCode::NOT_FOUND,
            Self::Storage(_) => ErrorCode::STORAGE_ERROR,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// A dangling foreign key is a bad request, not a missing resource.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) | Self::ReferenceNotFound { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateKey { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    fn data(&self) -> Value {
        match self {
            Self::Validation(errors) => json!(errors),
            _ => Value::Null,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let code = error_code.as_i32();
        let category = error_code.category();

        if status.is_server_error() {
            tracing::error!(
                error_code = code,
                %category,
                status = %status,
                error = %self,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error_code = code,
                %category,
                status = %status,
                message = %self,
                "Request rejected"
            );
        }

        let body = Json(json!({
            "code": code,
            "message": self.public_message(),
            "data": self.data()
        }));

        (status, body).into_response()
    }
}

/// Storage-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Lock acquisition failed.
    #[error("Failed to acquire lock: {0}")]
    LockFailed(String),

    /// File I/O error.
    #[error("File I/O error: {0}")]
    FileIO(String),

    /// Backend not available.
    #[error("Storage backend unavailable")]
    Unavailable,
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIO(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::not_found(EntityKind::Post, 1).error_code(),
            ErrorCode::NOT_FOUND
        );
        assert_eq!(
            AppError::missing_reference(EntityKind::User, 99_999).error_code(),
            ErrorCode::REFERENCE_NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("test".to_string()).error_code(),
            ErrorCode::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found(EntityKind::Album, 3).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::missing_reference(EntityKind::User, 99_999).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DuplicateKey {
                field: "email",
                value: "a@b.io".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Storage(StorageError::Unavailable).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::missing_reference(EntityKind::User, 99_999).to_string(),
            "User with id 99999 does not exist"
        );
        assert_eq!(
            AppError::not_found(EntityKind::Todo, 7).to_string(),
            "Todo with id 7 not found"
        );
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = AppError::Storage(StorageError::FileIO("/secret/path".to_string()));
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::not_found(EntityKind::User, 1);
        assert_eq!(err.public_message(), "User with id 1 not found");
    }
}
