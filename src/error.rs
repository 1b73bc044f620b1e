//! Canonical error and result types for the crate.

use crate::{config::ConfigError, delay::DelayError};

/// Top-level error type exposed by `scenario_pacing`.
///
/// Separates start-up configuration failures from per-call delay failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PacingError {
    /// The pacing configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A nominal delay could not be scaled.
    #[error("delay error: {0}")]
    Delay(#[from] DelayError),
}

/// Canonical result alias used by `scenario_pacing` public APIs.
pub type Result<T> = std::result::Result<T, PacingError>;
