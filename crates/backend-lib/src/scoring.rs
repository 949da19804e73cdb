// ============================
// crates/backend-lib/src/scoring.rs
// ============================
//! Heuristic password strength scoring.
use crate::charset::{CharacterClass, LOWERCASE};
use crate::metrics as keys;
use crate::validator::validate_password;
use ::metrics::counter;
use password_common::StrengthResponse;
use std::collections::HashMap;
use std::fmt;

/// Highest possible score
pub const MAX_SCORE: u8 = 10;

/// Lengths beyond this earn no extra base points
const LENGTH_CAP: usize = 20;

/// Cap on the entropy contribution
const MAX_ENTROPY_SCORE: f64 = 4.0;

const REPETITION_PENALTY: f64 = -2.0;

/// Strength band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    Unknown,
}

impl StrengthLabel {
    pub fn from_score(score: i64) -> Self {
        match score {
            0..=3 => StrengthLabel::Weak,
            4..=6 => StrengthLabel::Medium,
            7..=10 => StrengthLabel::Strong,
            _ => StrengthLabel::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded score plus its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

impl From<StrengthResult> for StrengthResponse {
    fn from(result: StrengthResult) -> Self {
        Self {
            score: result.score,
            label: result.label.to_string(),
        }
    }
}

/// Sum of the sizes of every class present in `password`, floored at the
/// lowercase alphabet size so passwords made only of unrecognised
/// characters still get a non-zero alphabet.
pub fn character_set_size(password: &str) -> usize {
    let size: usize = CharacterClass::ALL
        .iter()
        .filter(|class| class.present_in(password))
        .map(|class| class.size())
        .sum();
    size.max(LOWERCASE.len())
}

/// Estimated entropy in bits: `log2(charset_size ^ len)`, or 0 when empty
pub fn entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let len = password.chars().count() as f64;
    len * (character_set_size(password) as f64).log2()
}

/// Whether one character makes up more than half of the password
fn has_dominant_character(password: &str) -> bool {
    let len = password.chars().count();
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts.values().any(|&count| count * 2 > len)
}

/// Score `password` from 0 to 10.
///
/// Combines a length base, class diversity, an entropy estimate and a
/// penalty for a dominant repeated character. Ties round to even.
pub fn score(password: &str) -> StrengthResult {
    let validation = validate_password(password);
    let len = password.chars().count();

    let base = len.min(LENGTH_CAP) as f64 / 2.0;
    let diversity = f64::from(validation.diversity());
    let entropy_score = (entropy(password) / 10.0).min(MAX_ENTROPY_SCORE);
    let repetition_penalty = if has_dominant_character(password) {
        REPETITION_PENALTY
    } else {
        0.0
    };

    let raw = base * 0.4 + diversity * 1.5 + entropy_score + repetition_penalty;
    let bounded = (raw.round_ties_even() as i64).clamp(0, i64::from(MAX_SCORE));

    counter!(keys::PASSWORD_SCORED).increment(1);

    StrengthResult {
        score: bounded as u8,
        label: StrengthLabel::from_score(bounded),
    }
}
