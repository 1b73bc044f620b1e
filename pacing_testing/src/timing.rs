//! Wall-clock assertions for scaled delays.

use std::time::{Duration, Instant};

use rstest::fixture;
use scenario_pacing::Pacer;

/// Slack allowed around an expected duration.
///
/// `relative` is a fraction of the expected duration and `absolute` is added
/// on top so very short waits are not judged against scheduler jitter alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: Duration,
}

impl Tolerance {
    /// ±20% plus 50ms, suitable for shared CI hardware.
    pub const CI: Tolerance = Tolerance {
        relative: 0.2,
        absolute: Duration::from_millis(50),
    };

    /// Inclusive bounds accepted around `expected`.
    #[must_use]
    pub fn bounds(self, expected: Duration) -> (Duration, Duration) {
        let slack = expected.mul_f64(self.relative) + self.absolute;
        (expected.saturating_sub(slack), expected + slack)
    }
}

impl Default for Tolerance {
    fn default() -> Self { Self::CI }
}

/// An elapsed duration fell outside its tolerance window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingMismatch {
    pub elapsed: Duration,
    pub expected: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl std::fmt::Display for TimingMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "elapsed {:?} outside [{:?}, {:?}] around expected {:?}",
            self.elapsed, self.min, self.max, self.expected
        )
    }
}

impl std::error::Error for TimingMismatch {}

/// Check that `elapsed` lies within `tolerance` of `expected`.
///
/// # Errors
///
/// Returns a [`TimingMismatch`] describing the window when it does not.
pub fn assert_within(
    elapsed: Duration,
    expected: Duration,
    tolerance: Tolerance,
) -> Result<(), TimingMismatch> {
    let (min, max) = tolerance.bounds(expected);
    if (min..=max).contains(&elapsed) {
        Ok(())
    } else {
        Err(TimingMismatch {
            elapsed,
            expected,
            min,
            max,
        })
    }
}

/// Run `f` and return its output with the wall-clock time it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Pacer using the default scale factor.
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn pacer() -> Pacer { Pacer::default() }
