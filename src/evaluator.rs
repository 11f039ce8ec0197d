//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy::compute_entropy;
use crate::error::EvaluationError;
use crate::report::{CharacterClassFlags, StrengthReport};
use crate::sections::CHECKLIST;

/// Delay before an async evaluation runs, so quick successive edits coalesce.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Errors
/// Returns [`EvaluationError::EmptyInput`] if the password is empty.
pub fn evaluate(password: &SecretString) -> Result<StrengthReport, EvaluationError> {
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("refusing to evaluate an empty password");
        return Err(EvaluationError::EmptyInput);
    }

    // Orchestrator: run the checklist in display order
    let [length_ok, has_lower, has_upper, has_digit, has_special] =
        CHECKLIST.map(|(_section_name, section_fn)| {
            let passed = section_fn(password);
            #[cfg(feature = "tracing")]
            tracing::trace!(section = _section_name, passed, "checklist section");
            passed
        });

    let flags = CharacterClassFlags {
        length_ok,
        has_lower,
        has_upper,
        has_digit,
        has_special,
    };
    let report = StrengthReport::new(compute_entropy(password), flags);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        entropy_bits = report.entropy_bits(),
        score = report.score(),
        tier = %report.tier(),
        "password evaluated"
    );

    Ok(report)
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled by then the input is
/// considered stale and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<StrengthReport, EvaluationError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded, dropping it");
        return;
    }

    let evaluation = evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::report::StrengthTier;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_report() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_tx(&secret("Abcdef12!@"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.unwrap().tier(), StrengthTier::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_error_for_empty() {
        let (tx, mut rx) = mpsc::channel(1);

        evaluate_tx(&secret(""), CancellationToken::new(), tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation, Err(EvaluationError::EmptyInput));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_tx(&secret("Abcdef12"), token, tx).await;

        // Sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        evaluate_tx(&secret("Abcdef12"), CancellationToken::new(), tx).await;
    }
}
