//! Character variety sections - one check per character class.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharacterClass;

fn has_class(password: &SecretString, class: CharacterClass) -> bool {
    class.is_present_in(password.expose_secret())
}

/// Checks for at least one lowercase ASCII letter.
pub fn lowercase_section(password: &SecretString) -> bool {
    has_class(password, CharacterClass::Lowercase)
}

/// Checks for at least one uppercase ASCII letter.
pub fn uppercase_section(password: &SecretString) -> bool {
    has_class(password, CharacterClass::Uppercase)
}

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> bool {
    has_class(password, CharacterClass::Digit)
}

/// Checks for at least one character outside `[A-Za-z0-9]`.
pub fn special_section(password: &SecretString) -> bool {
    has_class(password, CharacterClass::Special)
}
