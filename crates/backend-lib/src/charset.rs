// ============================
// crates/backend-lib/src/charset.rs
// ============================
//! ASCII character classes used for validation, generation and scoring.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Generation alphabet: all four classes in registry order
pub const FULL_SET: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
);

/// One of the four disjoint character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in registry order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub const fn members(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Number of members (all ASCII, so bytes == chars)
    pub const fn size(self) -> usize {
        self.members().len()
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.members().as_bytes().contains(&(c as u8))
    }

    /// Whether any character of `password` belongs to this class
    pub fn present_in(self, password: &str) -> bool {
        password.chars().any(|c| self.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharacterClass::Upper.size(), 26);
        assert_eq!(CharacterClass::Lower.size(), 26);
        assert_eq!(CharacterClass::Digit.size(), 10);
        assert_eq!(CharacterClass::Symbol.size(), 32);
        assert_eq!(FULL_SET.len(), 94);
    }

    #[test]
    fn test_classes_are_disjoint_and_cover_full_set() {
        let mut seen = HashSet::new();
        for class in CharacterClass::ALL {
            for c in class.members().chars() {
                assert!(seen.insert(c), "{c:?} appears in more than one class");
            }
        }
        let full: HashSet<char> = FULL_SET.chars().collect();
        assert_eq!(seen, full);

        let concatenated: String = CharacterClass::ALL.iter().map(|c| c.members()).collect();
        assert_eq!(concatenated, FULL_SET);
    }

    #[test]
    fn test_contains() {
        assert!(CharacterClass::Upper.contains('Q'));
        assert!(!CharacterClass::Upper.contains('q'));
        assert!(CharacterClass::Symbol.contains('\\'));
        assert!(CharacterClass::Symbol.contains('`'));
        assert!(!CharacterClass::Symbol.contains(' '));
        assert!(!CharacterClass::Lower.contains('é'));
    }
}
