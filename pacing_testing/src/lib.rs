//! Utilities for exercising a [`Pacer`](scenario_pacing::Pacer) against the
//! wall clock during tests.
//!
//! Timing assertions use a relative [`Tolerance`] so they stay stable on
//! loaded CI machines, and [`LoggerHandle`] serialises access to the global
//! `logtest` logger.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use pacing_testing::{Tolerance, assert_within, measure};
//! use scenario_pacing::Pacer;
//!
//! let (delay, elapsed) = measure(|| Pacer::default().sleep(0.01).unwrap());
//! assert_within(elapsed, delay, Tolerance::CI).unwrap();
//! ```

pub mod logging;
pub mod timing;

pub use logging::{LoggerHandle, logger};
pub use timing::{Tolerance, TimingMismatch, assert_within, measure, pacer};
