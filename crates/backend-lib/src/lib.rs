// ============================
// password-backend-lib/src/lib.rs
// ============================
//! Core functionality for the password service.
//!
//! The password core (`policy`, `charset`, `validator`, `generator`,
//! `scoring` and the `service` flows) is synchronous and holds no mutable
//! state. The remaining modules expose it over HTTP.

pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod metrics;
pub mod policy;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;
pub mod validator;

pub use crate::config::Settings;
pub use crate::error::{AppError, PasswordError};
pub use crate::policy::{policy, PasswordPolicy};
pub use crate::router::create_router;
pub use crate::scoring::{StrengthLabel, StrengthResult};
pub use crate::service::{full_flow, generate_flow, strength_flow, validate_flow, FullAnalysis};
pub use crate::validator::ValidationResult;
