//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::error::Error as _;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Client-facing message for every server-side failure
pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum AccountError {
    /// Body or path could not be bound, or a required field is missing
    #[error("invalid request")]
    InvalidRequest(String),

    /// Birthday is not `YYYY-MM-DD`
    #[error("invalid date format")]
    InvalidDateFormat,

    /// A user with the same name (or email) is already stored
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    /// No stored user matches the given name and password
    #[error("failed login")]
    LoginFailed,

    /// Session could not be opened or saved
    #[error("Session error: {0}")]
    Session(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::InvalidRequest(_)
            | AccountError::InvalidDateFormat
            | AccountError::UserAlreadyExists => StatusCode::BAD_REQUEST,
            AccountError::UserNotFound => StatusCode::NOT_FOUND,
            AccountError::LoginFailed => StatusCode::UNAUTHORIZED,
            AccountError::Session(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ErrorKind for this error
    ///
    /// Duplicate users answer 400 rather than 409 to keep the public
    /// contract of `POST /signup`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidRequest(_)
            | AccountError::InvalidDateFormat
            | AccountError::UserAlreadyExists => ErrorKind::BadRequest,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::LoginFailed => ErrorKind::Unauthorized,
            AccountError::Session(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server-side details never reach the client.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, INTERNAL_MESSAGE)
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Session(msg) => {
                tracing::error!(message = %msg, "Session error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::LoginFailed => {
                tracing::warn!("Failed login attempt");
            }
            AccountError::InvalidRequest(reason) => {
                tracing::debug!(reason = %reason, "Rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AccountError::InvalidRequest(
                err.source()
                    .map_or_else(|| err.message().to_string(), |source| source.to_string()),
            ),
            _ => AccountError::Internal(err.to_string()),
        }
    }
}
