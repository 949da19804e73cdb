// ============================
// crates/backend-lib/src/generator.rs
// ============================
//! Random password generation.
//!
//! Every draw, including the final shuffle, comes from a cryptographically
//! secure generator. Callers may inject their own (`R: Rng + CryptoRng`);
//! [`generate_password`] uses the thread-local CSPRNG.
use crate::charset::{CharacterClass, FULL_SET};
use crate::error::PasswordError;
use crate::metrics as keys;
use crate::policy::policy;
use ::metrics::counter;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

/// Shortest length that can hold one character of every class
pub const MIN_GENERATED_LENGTH: usize = CharacterClass::ALL.len();

/// Pick one character uniformly from an ASCII charset
fn pick<R: Rng + CryptoRng>(charset: &str, rng: &mut R) -> Option<char> {
    charset.as_bytes().choose(rng).copied().map(char::from)
}

/// Check a requested length against the generation bounds
pub fn effective_length(length: Option<usize>) -> Result<usize, PasswordError> {
    let policy = policy();
    let length = length.unwrap_or(policy.default_length);
    if length < MIN_GENERATED_LENGTH {
        return Err(PasswordError::LengthTooShort {
            requested: length,
            minimum: MIN_GENERATED_LENGTH,
        });
    }
    if length > policy.max_length {
        return Err(PasswordError::LengthExceedsMaximum {
            requested: length,
            maximum: policy.max_length,
        });
    }
    Ok(length)
}

/// Generate a password with the thread-local CSPRNG
pub fn generate_password(length: Option<usize>) -> Result<String, PasswordError> {
    generate_password_with(length, &mut rand::rng())
}

/// Generate a password of `length` (or the policy default) characters
/// containing at least one character from each class.
pub fn generate_password_with<R: Rng + CryptoRng>(
    length: Option<usize>,
    rng: &mut R,
) -> Result<String, PasswordError> {
    let length = effective_length(length)?;

    let mut chars = Zeroizing::new(Vec::with_capacity(length));
    for class in CharacterClass::ALL {
        chars.extend(pick(class.members(), rng));
    }
    for _ in MIN_GENERATED_LENGTH..length {
        chars.extend(pick(FULL_SET, rng));
    }
    chars.shuffle(rng);

    counter!(keys::PASSWORD_GENERATED).increment(1);
    tracing::debug!(length, "generated password");

    Ok(chars.iter().collect())
}
