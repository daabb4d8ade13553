//! # Backoff policy for ward restarts.
//!
//! [`BackoffPolicy`] spaces out restarts of a ward that keeps going silent. The base wait
//! before restart number `n` (0-indexed) is `first × factor^n`, clamped to `max`, and
//! jitter is applied to that clamped base. The base depends only on `n`, so jitter never
//! feeds back into later delays.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use steward::{BackoffPolicy, JitterPolicy};
//!
//! let backoff = BackoffPolicy {
//!     first: Duration::from_millis(250),
//!     max: Duration::from_secs(2),
//!     factor: 2.0,
//!     jitter: JitterPolicy::None,
//! };
//!
//! assert_eq!(backoff.delay_for(0), Duration::from_millis(250));
//! assert_eq!(backoff.delay_for(2), Duration::from_secs(1));
//! assert_eq!(backoff.delay_for(9), Duration::from_secs(2));
//! ```

use std::time::Duration;

use crate::policies::jitter::JitterPolicy;

/// Delay schedule between a missed heartbeat and the next ward start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackoffPolicy {
    /// Wait before the first restart.
    pub first: Duration,
    /// Upper bound for any wait.
    pub max: Duration,
    /// Growth factor per restart (`1.0` = constant).
    pub factor: f64,
    /// Randomization applied to each wait.
    pub jitter: JitterPolicy,
}

impl Default for BackoffPolicy {
    /// `first = 100ms`, `factor = 2.0`, `max = 30s`, no jitter.
    fn default() -> Self {
        Self {
            first: Duration::from_millis(100),
            max: Duration::from_secs(30),
            factor: 2.0,
            jitter: JitterPolicy::None,
        }
    }
}

impl BackoffPolicy {
    /// Constant wait of `delay` before every restart.
    pub fn constant(delay: Duration) -> Self {
        Self {
            first: delay,
            max: delay,
            factor: 1.0,
            jitter: JitterPolicy::None,
        }
    }

    /// Returns the wait before restart number `restart` (0-indexed).
    ///
    /// Non-finite or negative intermediate values clamp to `max`.
    pub fn delay_for(&self, restart: u32) -> Duration {
        let exp = restart.min(i32::MAX as u32) as i32;
        let secs = self.first.as_secs_f64() * self.factor.powi(exp);

        let base = if secs.is_finite() && secs >= 0.0 && secs <= self.max.as_secs_f64() {
            Duration::from_secs_f64(secs)
        } else {
            self.max
        };
        self.jitter.apply(base)
    }
}
