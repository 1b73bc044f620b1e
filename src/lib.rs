#![doc(html_root_url = "https://docs.rs/scenario_pacing/latest")]
//! Public API for the `scenario_pacing` library.
//!
//! This crate provides a scaled delay harness for behaviour test steps,
//! together with the typed step outcomes those steps hand back to the test
//! framework.

pub mod config;
pub mod delay;
pub mod error;
pub mod step;

pub use config::{ConfigError, PacingConfig, SCALE_FACTOR_ENV, ScaleFactor};
pub use delay::{DelayError, Pacer, scaled_sleep};
/// Result type alias re-exported for convenience.
pub use error::{PacingError, Result};
pub use step::{ScenarioContext, StepError, StepResult};
