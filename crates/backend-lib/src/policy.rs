// ============================
// crates/backend-lib/src/policy.rs
// ============================
//! Fixed password policy shared by every request.

/// Length bounds applied to validation and generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Shortest password that passes validation
    pub min_length: usize,
    /// Longest password that passes validation or can be generated
    pub max_length: usize,
    /// Length used when generation is requested without one
    pub default_length: usize,
}

impl PasswordPolicy {
    /// Build a policy, rejecting bounds below the hard floors.
    ///
    /// Evaluated in const context for [`POLICY`], so a bad literal is a
    /// compile error rather than a runtime failure.
    pub const fn new(min_length: usize, max_length: usize, default_length: usize) -> Self {
        assert!(min_length >= 4, "min_length must be at least 4");
        assert!(max_length >= 32, "max_length must be at least 32");
        assert!(default_length >= 8, "default_length must be at least 8");
        Self {
            min_length,
            max_length,
            default_length,
        }
    }

    /// Whether `len` characters falls inside `min_length..=max_length`
    pub const fn allows_length(&self, len: usize) -> bool {
        self.min_length <= len && len <= self.max_length
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        POLICY
    }
}

/// The process-wide policy
pub static POLICY: PasswordPolicy = PasswordPolicy::new(12, 128, 16);

/// Shared read-only handle to [`POLICY`]
pub fn policy() -> &'static PasswordPolicy {
    &POLICY
}
