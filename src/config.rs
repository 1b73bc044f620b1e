//! Pacing configuration.
//!
//! The scale factor applied to every nominal delay is resolved once, either
//! explicitly or from the `PACING_SCALE_FACTOR` environment variable, and is
//! immutable afterwards. [`PacingConfig`] is `Copy`, so concurrently running
//! scenarios share it without synchronisation.

use std::fmt;

use tracing::info;

/// Environment variable consulted by [`PacingConfig::from_env`].
pub const SCALE_FACTOR_ENV: &str = "PACING_SCALE_FACTOR";

/// Errors raised while building a [`PacingConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The scale factor was negative, NaN or infinite.
    #[error("scale factor must be finite and non-negative, got {value}")]
    InvalidScale { value: f64 },
    /// The environment variable did not hold a number.
    #[error("{var} must be a number, got {value:?}")]
    Parse { var: &'static str, value: String },
}

/// Multiplier applied to every nominal delay.
///
/// # Invariants
/// - the wrapped value is finite
/// - the wrapped value is at least zero; zero disables waiting entirely
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Scale used when nothing else is configured.
    pub const DEFAULT: ScaleFactor = ScaleFactor(3.0);

    /// Validate and wrap a raw multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScale`] for negative or non-finite
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_pacing::ScaleFactor;
    ///
    /// assert_eq!(ScaleFactor::new(1.5).map(ScaleFactor::get), Ok(1.5));
    /// assert!(ScaleFactor::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidScale { value })
        }
    }

    /// Return the raw multiplier.
    #[must_use]
    pub fn get(self) -> f64 { self.0 }
}

impl Default for ScaleFactor {
    fn default() -> Self { Self::DEFAULT }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "x{}", self.0) }
}

/// Immutable pacing settings for a test run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PacingConfig {
    scale: ScaleFactor,
}

impl PacingConfig {
    /// Build a configuration with an explicit scale.
    #[must_use]
    pub fn new(scale: ScaleFactor) -> Self { Self { scale } }

    /// Return the configured scale factor.
    #[must_use]
    pub fn scale(&self) -> ScaleFactor { self.scale }

    /// Resolve the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`PacingConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!(scale = config.scale.get(), "resolved pacing scale factor");
        Ok(config)
    }

    /// Resolve the configuration through an arbitrary key lookup.
    ///
    /// An unset or blank [`SCALE_FACTOR_ENV`] yields the default scale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the value is not a number and
    /// [`ConfigError::InvalidScale`] when it is negative or non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_pacing::{PacingConfig, SCALE_FACTOR_ENV};
    ///
    /// let config = PacingConfig::from_lookup(|key| {
    ///     (key == SCALE_FACTOR_ENV).then(|| " 0.5 ".to_owned())
    /// })
    /// .unwrap();
    /// assert_eq!(config.scale().get(), 0.5);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let Some(raw) = lookup(SCALE_FACTOR_ENV) else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let value: f64 = trimmed.parse().map_err(|_| ConfigError::Parse {
            var: SCALE_FACTOR_ENV,
            value: raw.clone(),
        })?;
        ScaleFactor::new(value).map(Self::new)
    }
}
