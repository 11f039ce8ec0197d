//! Password strength estimation library
//!
//! Estimates password strength from the entropy of the character classes it
//! uses, combined with a five-rule checklist, and classifies it as
//! [`StrengthTier::Weak`], [`StrengthTier::Moderate`] or [`StrengthTier::Strong`].
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation over a channel
//! - `cli` (default): Builds the `pwd-entropy` binary
//! - `serde`: Serializes reports
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{evaluate, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef12!@".to_string().into());
//! let report = evaluate(&password).expect("password is not empty");
//!
//! assert_eq!(report.score(), 5);
//! assert_eq!(report.tier(), StrengthTier::Strong);
//! println!("{report}");
//! ```

// Internal modules
mod charset;
mod entropy;
mod error;
mod evaluator;
mod report;
mod sections;

// Public API
pub use charset::{CharacterClass, PUNCTUATION};
pub use entropy::{compute_entropy, pool_size};
pub use error::EvaluationError;
pub use evaluator::evaluate;
pub use report::{CharacterClassFlags, StrengthReport, StrengthTier, BAR_MAX_WIDTH};
pub use sections::MIN_LENGTH;

#[cfg(feature = "async")]
pub use evaluator::{evaluate_tx, DEBOUNCE};
