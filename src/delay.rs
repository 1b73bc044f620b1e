//! Scaled delay harness.
//!
//! Step authors write the delay a scenario should "feel" like, in seconds.
//! [`Pacer`] multiplies it by the configured [`ScaleFactor`] and waits for
//! the result, so the pacing of a whole suite changes in one place.
//!
//! ```
//! use std::time::Duration;
//!
//! use scenario_pacing::{PacingConfig, Pacer, ScaleFactor};
//!
//! let pacer = Pacer::new(PacingConfig::new(ScaleFactor::new(0.0).unwrap()));
//! assert_eq!(pacer.sleep(0.4).unwrap(), Duration::ZERO);
//! ```

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{PacingConfig, ScaleFactor};

/// Errors raised when a nominal delay cannot be scaled.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DelayError {
    /// The nominal delay was negative, NaN or infinite.
    #[error("nominal delay must be finite and non-negative, got {nominal}s")]
    InvalidArgument { nominal: f64 },
    /// The scaled delay does not fit in a [`Duration`].
    #[error("nominal delay {nominal}s scaled by {scale} is out of range")]
    OutOfRange { nominal: f64, scale: ScaleFactor },
}

/// Converts nominal delays into real waits.
///
/// A `Pacer` holds no state beyond its scale factor: every call is an
/// independent wait and nothing is counted or rate limited.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pacer {
    scale: ScaleFactor,
}

impl Pacer {
    /// Create a pacer from an explicit configuration.
    #[must_use]
    pub fn new(config: PacingConfig) -> Self {
        Self {
            scale: config.scale(),
        }
    }

    /// Create a pacer from the `PACING_SCALE_FACTOR` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`PacingError::Config`](crate::PacingError::Config) if the
    /// variable holds an invalid scale.
    pub fn from_env() -> crate::Result<Self> {
        let config = PacingConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Return the scale factor applied to every delay.
    #[must_use]
    pub fn scale(&self) -> ScaleFactor { self.scale }

    /// Compute the real duration for `nominal_secs` without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::InvalidArgument`] for negative or non-finite
    /// input and [`DelayError::OutOfRange`] when the product overflows a
    /// [`Duration`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use scenario_pacing::Pacer;
    ///
    /// let pacer = Pacer::default();
    /// assert_eq!(pacer.scaled(0.5).unwrap(), Duration::from_millis(1500));
    /// assert!(pacer.scaled(-0.1).is_err());
    /// ```
    pub fn scaled(&self, nominal_secs: f64) -> Result<Duration, DelayError> {
        if !nominal_secs.is_finite() || nominal_secs < 0.0 {
            warn!(nominal_secs, "rejected nominal delay");
            return Err(DelayError::InvalidArgument {
                nominal: nominal_secs,
            });
        }
        Duration::try_from_secs_f64(nominal_secs * self.scale.get()).map_err(|_| {
            warn!(nominal_secs, scale = self.scale.get(), "scaled delay out of range");
            DelayError::OutOfRange {
                nominal: nominal_secs,
                scale: self.scale,
            }
        })
    }

    /// Block the calling thread for `nominal_secs` times the scale factor.
    ///
    /// Returns the duration that was requested. A zero duration returns
    /// immediately.
    ///
    /// # Errors
    ///
    /// See [`Pacer::scaled`]. Nothing sleeps when an error is returned.
    pub fn sleep(&self, nominal_secs: f64) -> Result<Duration, DelayError> {
        let delay = self.scaled(nominal_secs)?;
        self.trace(nominal_secs, delay);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(delay)
    }

    /// Suspend the current task for `nominal_secs` times the scale factor.
    ///
    /// Async counterpart of [`Pacer::sleep`]; it yields to the Tokio runtime
    /// instead of blocking the worker thread.
    ///
    /// # Errors
    ///
    /// See [`Pacer::scaled`].
    pub async fn sleep_async(&self, nominal_secs: f64) -> Result<Duration, DelayError> {
        let delay = self.scaled(nominal_secs)?;
        self.trace(nominal_secs, delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(delay)
    }

    fn trace(&self, nominal_secs: f64, delay: Duration) {
        debug!(
            nominal_secs,
            scale = self.scale.get(),
            scaled_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "pacing delay"
        );
    }
}

/// Block for `nominal_secs` scaled by [`ScaleFactor::DEFAULT`].
///
/// `PACING_SCALE_FACTOR` is not consulted. Code that should follow the
/// configured pacing resolves a [`Pacer`] once with [`Pacer::from_env`] and
/// sleeps through it.
///
/// # Errors
///
/// See [`Pacer::scaled`].
pub fn scaled_sleep(nominal_secs: f64) -> Result<Duration, DelayError> {
    Pacer::default().sleep(nominal_secs)
}
