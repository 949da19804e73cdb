// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Request validation module.
//!
//! Checks the shape of incoming request bodies before they reach the
//! password core. The core re-checks generation lengths against the policy.

use password_common::{FullRequest, GenerateRequest, PasswordRequest};
use thiserror::Error;

/// Smallest `length` a request may carry
pub const MIN_REQUEST_LENGTH: i64 = 4;
/// Largest `length` a request may carry
pub const MAX_REQUEST_LENGTH: i64 = 256;

/// Possible validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Length must be between 4 and 256, got {0}")]
    LengthOutOfRange(i64),

    #[error("Provide either a password or a length for full analysis")]
    MissingPasswordOrLength,
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// What the full-analysis flow should run on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisTarget {
    /// Analyse the caller's password
    Supplied(String),
    /// Generate a password of the given (or default) length first
    Generate(Option<usize>),
}

/// Validate a password field
pub fn validate_password_field(password: &str) -> ValidationResult<&str> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(password)
}

/// Validate an optional length field
pub fn validate_length_field(length: Option<i64>) -> ValidationResult<Option<usize>> {
    match length {
        None => Ok(None),
        Some(len) if (MIN_REQUEST_LENGTH..=MAX_REQUEST_LENGTH).contains(&len) => {
            Ok(Some(len as usize))
        },
        Some(len) => Err(ValidationError::LengthOutOfRange(len)),
    }
}

/// Validate a `/password/validate` or `/password/strength` body
pub fn validate_password_request(req: &PasswordRequest) -> ValidationResult<&str> {
    validate_password_field(&req.password)
}

/// Validate a `/password/generate` body
pub fn validate_generate_request(req: &GenerateRequest) -> ValidationResult<Option<usize>> {
    validate_length_field(req.length)
}

/// Validate a `/password/full` body.
///
/// An empty password counts as absent, so it only passes when a length is
/// supplied, in which case a password is generated.
pub fn validate_full_request(req: FullRequest) -> ValidationResult<AnalysisTarget> {
    let length = validate_length_field(req.length)?;
    match req.password {
        Some(password) if !password.is_empty() => Ok(AnalysisTarget::Supplied(password)),
        _ if length.is_some() => Ok(AnalysisTarget::Generate(length)),
        _ => Err(ValidationError::MissingPasswordOrLength),
    }
}
