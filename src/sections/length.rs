//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Minimum number of characters for the length rule.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}
