//! Checklist sections
//!
//! Each section checks one rule and contributes one flag to the score.

mod length;
mod variety;

use secrecy::SecretString;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// A checklist section: `true` if the password satisfies the rule.
pub type Section = fn(&SecretString) -> bool;

/// The checklist, in display order.
pub const CHECKLIST: [(&str, Section); 5] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("numbers", digit_section),
    ("special", special_section),
];
