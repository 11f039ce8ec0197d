//! Entropy estimate from the alphabet pool.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharacterClass;

/// Returns the size of the alphabet implied by the classes present in `password`.
///
/// Each class contributes its whole pool once, however many of its characters
/// appear. The empty string has a pool of 0.
pub fn pool_size(password: &str) -> u32 {
    CharacterClass::ALL
        .iter()
        .filter(|class| class.is_present_in(password))
        .map(|class| class.pool_size())
        .sum()
}

/// Estimates the entropy of `password` in bits as `length * log2(pool_size)`.
///
/// This is the entropy of a string drawn uniformly at random from the detected
/// alphabet. It overestimates human-chosen passwords. Returns `0.0` for an
/// empty password.
pub fn compute_entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    let pool = pool_size(pwd);
    if pool == 0 {
        return 0.0;
    }
    pwd.chars().count() as f64 * f64::from(pool).log2()
}
