//! Contest Error Types
//!
//! This module provides contest-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Expected user errors additionally carry a [`Notice`] so the
//! presentation layer can render them as one-time flash messages.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::notice::Notice;
use thiserror::Error;

/// Contest-specific result type alias
pub type ContestResult<T> = Result<T, ContestError>;

/// Contest-specific error variants
#[derive(Debug, Error)]
pub enum ContestError {
    /// Competition not found
    #[error("Competition not found")]
    CompetitionNotFound,

    /// Enrollment not found
    #[error("Enrollment not found")]
    EnrollmentNotFound,

    /// Account is already enrolled in this competition
    #[error("You are already participating in this competition")]
    AlreadyEnrolled,

    /// Account is not enrolled in this competition
    #[error("You are not participating in this competition")]
    NotEnrolled,

    /// Caller is not the competition creator
    #[error("You do not have permission to perform this action")]
    Forbidden,

    /// Enrollment has no stored file
    #[error("No file data available for download")]
    NoSubmission,

    /// Bad input (invalid fee, empty description, disallowed file, ...)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContestError::CompetitionNotFound
            | ContestError::EnrollmentNotFound
            | ContestError::NoSubmission => StatusCode::NOT_FOUND,
            ContestError::AlreadyEnrolled | ContestError::NotEnrolled => StatusCode::CONFLICT,
            ContestError::Forbidden => StatusCode::FORBIDDEN,
            ContestError::Validation(_) => StatusCode::BAD_REQUEST,
            ContestError::Database(_) | ContestError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContestError::CompetitionNotFound
            | ContestError::EnrollmentNotFound
            | ContestError::NoSubmission => ErrorKind::NotFound,
            ContestError::AlreadyEnrolled | ContestError::NotEnrolled => ErrorKind::Conflict,
            ContestError::Forbidden => ErrorKind::Forbidden,
            ContestError::Validation(_) => ErrorKind::BadRequest,
            ContestError::Database(_) | ContestError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// User-facing notice for expected errors
    ///
    /// Server errors return `None`; their cause is not exposed.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ContestError::Database(_) | ContestError::Internal(_) => None,
            // Joining twice is benign, not a mistake worth alarming over
            ContestError::AlreadyEnrolled => Some(Notice::info(self.to_string())),
            _ => Some(Notice::danger(self.to_string())),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContestError::Database(e) => {
                tracing::error!(error = %e, "Contest database error");
            }
            ContestError::Internal(msg) => {
                tracing::error!(message = %msg, "Contest internal error");
            }
            ContestError::Forbidden => {
                tracing::warn!("Denied contest operation for non-creator");
            }
            _ => {
                tracing::debug!(error = %self, "Contest error");
            }
        }
    }
}

impl IntoResponse for ContestError {
    fn into_response(self) -> Response {
        self.log();

        let app = self.to_app_error();
        let status = self.status_code();

        // RFC 7807 problem details, plus the flash notice for expected errors
        let mut body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", app.status_code()),
            "title": app.kind().as_str(),
            "status": app.status_code(),
            "detail": app.message(),
        });
        if let Some(notice) = self.notice() {
            if let Ok(value) = serde_json::to_value(&notice) {
                body["notice"] = value;
            }
        }

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ContestError {
    fn from(err: AppError) -> Self {
        ContestError::Internal(err.to_string())
    }
}
