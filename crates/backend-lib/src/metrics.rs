// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const PASSWORD_VALIDATED: &str = "password.validated";
pub const PASSWORD_GENERATED: &str = "password.generated";
pub const PASSWORD_SCORED: &str = "password.scored";
pub const FULL_ANALYSIS: &str = "password.full_analysis";
pub const REQUEST_REJECTED: &str = "request.rejected";
