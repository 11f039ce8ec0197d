use thiserror::Error;

/// Errors returned by [`evaluate`](crate::evaluate).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// No password was supplied. The caller must ask for one again.
    #[error("Please enter a password!")]
    EmptyInput,
}
