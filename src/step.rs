//! Step outcomes and scenario context.
//!
//! Step bodies return a [`StepResult`] instead of panicking. The behaviour
//! test framework owns dispatch and reporting; it sees a failed step as an
//! `Err` and reports the [`StepError`] message.

use crate::delay::DelayError;

/// Failure raised by a step implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StepError {
    /// An expected condition did not hold.
    #[error("assertion failed: {message}")]
    AssertionFailed { message: String },
    /// The pacing harness rejected a delay.
    #[error(transparent)]
    Delay(#[from] DelayError),
}

impl StepError {
    /// Build an [`StepError::AssertionFailed`] carrying `message`.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }
}

/// Outcome of a single step.
pub type StepResult = Result<(), StepError>;

/// Succeed when `condition` holds, otherwise fail with `message`.
///
/// # Errors
///
/// Returns [`StepError::AssertionFailed`] when `condition` is false.
///
/// ```
/// use scenario_pacing::step::{StepError, ensure};
///
/// assert!(ensure(true, "unreachable").is_ok());
/// assert_eq!(
///     ensure(false, "boom"),
///     Err(StepError::assertion("boom"))
/// );
/// ```
pub fn ensure(condition: bool, message: impl Into<String>) -> StepResult {
    if condition {
        Ok(())
    } else {
        Err(StepError::assertion(message))
    }
}

/// Fail unconditionally with `message`.
///
/// # Errors
///
/// Always returns [`StepError::AssertionFailed`].
pub fn fail(message: impl Into<String>) -> StepResult { Err(StepError::assertion(message)) }

/// Per-scenario state shared by consecutive steps.
///
/// Steps only read [`ScenarioContext::failed`]; the runner records each
/// outcome through [`ScenarioContext::record`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScenarioContext {
    failed: bool,
}

impl ScenarioContext {
    /// Whether any recorded step in this scenario has failed.
    #[must_use]
    pub fn failed(&self) -> bool { self.failed }

    /// Note `outcome` and hand it back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `outcome` itself when it is an error.
    pub fn record(&mut self, outcome: StepResult) -> StepResult {
        if let Err(err) = &outcome {
            tracing::debug!(error = %err, "step failed");
            self.failed = true;
        }
        outcome
    }
}
