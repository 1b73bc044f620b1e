//! Test world for pacing behavioural tests.
//!
//! Provides [`PacingWorld`], the per-scenario context handed to every step.
//! The runner injects one [`Pacer`] and one [`FailureLog`] into each world
//! before the scenario starts, so all scenarios share the scale resolved at
//! start-up and report their failures to the same place.

use std::sync::{Arc, Mutex, PoisonError};

use cucumber::World;
use scenario_pacing::{Pacer, ScenarioContext, StepResult};

/// A step failure attributed to the scenario it happened in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordedFailure {
    pub scenario: String,
    pub message: String,
}

/// Failures collected across every scenario of a run.
#[derive(Debug, Default, Clone)]
pub struct FailureLog(Arc<Mutex<Vec<RecordedFailure>>>);

impl FailureLog {
    fn push(&self, failure: RecordedFailure) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }

    /// Return the recorded failures, sorted by scenario.
    #[must_use]
    pub fn sorted(&self) -> Vec<RecordedFailure> {
        let mut failures = self.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
        failures.sort();
        failures
    }
}

#[derive(Debug, Default, World)]
pub struct PacingWorld {
    context: ScenarioContext,
    pacer: Pacer,
    scenario: String,
    failures: FailureLog,
}

impl PacingWorld {
    /// Prepare the world for `scenario`.
    pub fn install(&mut self, scenario: String, pacer: Pacer, failures: FailureLog) {
        self.scenario = scenario;
        self.pacer = pacer;
        self.failures = failures;
    }

    /// Run a step body and record its outcome on the scenario context.
    ///
    /// # Errors
    /// Returns the step body's error unchanged.
    pub fn step(&mut self, body: impl FnOnce(&Pacer, &ScenarioContext) -> StepResult) -> StepResult {
        let outcome = body(&self.pacer, &self.context);
        if let Err(err) = &outcome {
            self.failures.push(RecordedFailure {
                scenario: self.scenario.clone(),
                message: err.to_string(),
            });
        }
        self.context.record(outcome)
    }
}
