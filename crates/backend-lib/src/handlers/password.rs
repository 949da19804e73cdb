// ============================
// crates/backend-lib/src/handlers/password.rs
// ============================
//! Password route handlers.
//!
//! Each handler checks the request contract, runs one flow from
//! [`crate::service`] and converts the result into its wire type. Malformed
//! bodies surface as [`AppError::MalformedBody`]; out-of-range arguments as
//! [`AppError::InvalidInput`].
use crate::error::AppError;
use crate::service;
use crate::validation::{self, AnalysisTarget};
use axum::{extract::rejection::JsonRejection, Json};
use password_common::{
    FullRequest, FullResponse, GenerateRequest, GeneratedPasswordResponse, PasswordRequest,
    StrengthResponse, ValidationResponse,
};

pub async fn validate_password(
    payload: Result<Json<PasswordRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(req) = payload?;
    let password = validation::validate_password_request(&req)?;

    let result = service::validate_flow(password);
    tracing::debug!(overall = result.overall_result(), "validated password");

    Ok(Json(result.into()))
}

pub async fn generate_password(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GeneratedPasswordResponse>, AppError> {
    let Json(req) = payload?;
    let length = validation::validate_generate_request(&req)?;

    let password = service::generate_flow(length)?;

    Ok(Json(GeneratedPasswordResponse { password }))
}

pub async fn strength(
    payload: Result<Json<PasswordRequest>, JsonRejection>,
) -> Result<Json<StrengthResponse>, AppError> {
    let Json(req) = payload?;
    let password = validation::validate_password_request(&req)?;

    let result = service::strength_flow(password);
    tracing::debug!(score = result.score, label = %result.label, "scored password");

    Ok(Json(result.into()))
}

pub async fn full_analysis(
    payload: Result<Json<FullRequest>, JsonRejection>,
) -> Result<Json<FullResponse>, AppError> {
    let Json(req) = payload?;

    let analysis = match validation::validate_full_request(req)? {
        AnalysisTarget::Supplied(password) => service::full_flow(Some(&password), None)?,
        AnalysisTarget::Generate(length) => service::full_flow(None, length)?,
    };

    Ok(Json(analysis.into()))
}
