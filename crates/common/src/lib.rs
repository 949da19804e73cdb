// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between password service clients and the server.
//! This module defines the JSON request and response bodies for every route.

use serde::{Deserialize, Serialize};

/// Body for routes that operate on a caller-supplied password
/// (`/password/validate` and `/password/strength`)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PasswordRequest {
    /// Password to inspect (at least 1 character)
    pub password: String,
}

/// Body for `/password/generate`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Requested length (4..=256); the policy default is used when absent
    #[serde(default)]
    pub length: Option<i64>,
}

/// Body for `/password/full`
///
/// At least one of the two fields must be present. When `password` is
/// absent a new password is generated with `length`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct FullRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub length: Option<i64>,
}

/// Per-check outcome of validating a password against the policy
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResponse {
    pub length_ok: bool,
    pub upper_ok: bool,
    pub lower_ok: bool,
    pub digit_ok: bool,
    pub symbol_ok: bool,
    /// AND of the five checks above
    pub overall_result: bool,
}

/// A freshly generated password
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GeneratedPasswordResponse {
    pub password: String,
}

/// Heuristic strength of a password
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StrengthResponse {
    /// Score in `0..=10`
    pub score: u8,
    /// One of `weak`, `medium`, `strong` (or `unknown`)
    pub label: String,
}

/// Combined validation and strength analysis
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FullResponse {
    pub validation: ValidationResponse,
    pub strength: StrengthResponse,
    /// Only set when the server generated the password; a caller-supplied
    /// password is never echoed back.
    pub password: Option<String>,
}

/// Liveness probe response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error envelope returned with every non-2xx response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Machine-readable code plus human-readable message
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
