// ============================
// crates/backend-lib/src/validator.rs
// ============================
//! Password policy checks.
use crate::charset::CharacterClass;
use crate::policy::policy;
use password_common::ValidationResponse;

/// Outcome of each policy check for one password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub length_ok: bool,
    pub upper_ok: bool,
    pub lower_ok: bool,
    pub digit_ok: bool,
    pub symbol_ok: bool,
}

impl ValidationResult {
    /// True only when every individual check passed
    pub fn overall_result(&self) -> bool {
        self.length_ok && self.upper_ok && self.lower_ok && self.digit_ok && self.symbol_ok
    }

    /// Number of character classes present (0..=4)
    pub fn diversity(&self) -> u8 {
        [self.upper_ok, self.lower_ok, self.digit_ok, self.symbol_ok]
            .iter()
            .filter(|&&ok| ok)
            .count() as u8
    }
}

impl From<ValidationResult> for ValidationResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            length_ok: result.length_ok,
            upper_ok: result.upper_ok,
            lower_ok: result.lower_ok,
            digit_ok: result.digit_ok,
            symbol_ok: result.symbol_ok,
            overall_result: result.overall_result(),
        }
    }
}

pub fn check_length(password: &str) -> bool {
    policy().allows_length(password.chars().count())
}

pub fn check_upper(password: &str) -> bool {
    CharacterClass::Upper.present_in(password)
}

pub fn check_lower(password: &str) -> bool {
    CharacterClass::Lower.present_in(password)
}

pub fn check_digit(password: &str) -> bool {
    CharacterClass::Digit.present_in(password)
}

pub fn check_symbol(password: &str) -> bool {
    CharacterClass::Symbol.present_in(password)
}

/// Run every check against `password`.
///
/// Accepts any string, including the empty one; failing checks are simply
/// reported as `false`.
pub fn validate_password(password: &str) -> ValidationResult {
    ValidationResult {
        length_ok: check_length(password),
        upper_ok: check_upper(password),
        lower_ok: check_lower(password),
        digit_ok: check_digit(password),
        symbol_ok: check_symbol(password),
    }
}
