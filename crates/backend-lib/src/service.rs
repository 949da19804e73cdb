// ============================
// crates/backend-lib/src/service.rs
// ============================
//! Password flows composed from the validator, generator and scorer.
use crate::error::PasswordError;
use crate::generator::generate_password;
use crate::metrics as keys;
use crate::scoring::{score, StrengthResult};
use crate::validator::{validate_password, ValidationResult};
use ::metrics::counter;
use password_common::FullResponse;

/// Result of the combined flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullAnalysis {
    /// Set only when the password was generated by this flow
    pub password: Option<String>,
    pub validation: ValidationResult,
    pub strength: StrengthResult,
}

impl From<FullAnalysis> for FullResponse {
    fn from(analysis: FullAnalysis) -> Self {
        Self {
            validation: analysis.validation.into(),
            strength: analysis.strength.into(),
            password: analysis.password,
        }
    }
}

pub fn validate_flow(password: &str) -> ValidationResult {
    counter!(keys::PASSWORD_VALIDATED).increment(1);
    validate_password(password)
}

pub fn generate_flow(length: Option<usize>) -> Result<String, PasswordError> {
    generate_password(length)
}

pub fn strength_flow(password: &str) -> StrengthResult {
    score(password)
}

/// Validate and score `password`, generating one first when it is absent
/// or empty.
///
/// The returned [`FullAnalysis::password`] is only populated for generated
/// passwords so that a caller's secret is never handed back.
pub fn full_flow(
    password: Option<&str>,
    length: Option<usize>,
) -> Result<FullAnalysis, PasswordError> {
    counter!(keys::FULL_ANALYSIS).increment(1);

    let generated = match password {
        Some(pwd) if !pwd.is_empty() => None,
        _ => Some(generate_password(length)?),
    };
    let target = generated.as_deref().or(password).unwrap_or_default();

    let validation = validate_password(target);
    let strength = score(target);
    tracing::debug!(
        generated = generated.is_some(),
        overall = validation.overall_result(),
        score = strength.score,
        "full analysis complete"
    );

    Ok(FullAnalysis {
        password: generated,
        validation,
        strength,
    })
}
