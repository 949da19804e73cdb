// crates/backend-lib/src/error.rs

//! Central error types + Axum integration.
use crate::validation::ValidationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use password_common::{ErrorBody, ErrorDetail};
use thiserror::Error;

/// Invalid-argument failures raised by the password core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password length must be at least {minimum} to satisfy constraints (requested {requested})")]
    LengthTooShort { requested: usize, minimum: usize },

    #[error("Requested password length {requested} exceeds policy maximum of {maximum}")]
    LengthExceedsMaximum { requested: usize, maximum: usize },
}

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "VAL_001",
            AppError::MalformedBody(_) => "VAL_002",
        }
    }

    /// Get a sanitized message suitable for production use.
    ///
    /// Client errors keep their detail since it only describes the caller's
    /// own request and never contains password material.
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::MalformedBody(_) => "Invalid request format".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        ::metrics::counter!(crate::metrics::REQUEST_REJECTED).increment(1);
        tracing::debug!(code = error_code, error = %self, "request rejected");

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}
