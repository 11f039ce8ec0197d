//! Character classes recognized by the estimator.
//!
//! Only ASCII letters and digits are recognized as such. Every other
//! character, including non-ASCII ones, falls into [`CharacterClass::Special`].

/// The standard ASCII punctuation set, used as the size of the special pool.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A class of characters contributing to the alphabet pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the order their pools are summed.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Returns the class a single character belongs to.
    pub fn of(c: char) -> Self {
        match c {
            'a'..='z' => CharacterClass::Lowercase,
            'A'..='Z' => CharacterClass::Uppercase,
            '0'..='9' => CharacterClass::Digit,
            _ => CharacterClass::Special,
        }
    }

    /// Number of characters this class adds to the pool when present.
    pub fn pool_size(self) -> u32 {
        match self {
            CharacterClass::Lowercase | CharacterClass::Uppercase => 26,
            CharacterClass::Digit => 10,
            CharacterClass::Special => PUNCTUATION.len() as u32,
        }
    }

    /// Returns `true` if at least one character of `password` is in this class.
    pub fn is_present_in(self, password: &str) -> bool {
        password.chars().any(|c| CharacterClass::of(c) == self)
    }
}
