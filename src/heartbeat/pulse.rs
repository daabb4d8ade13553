//! # Pulses and pulse timing.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Valueless liveness marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pulse;

/// Producer side of a pulse channel.
///
/// Cloning yields another producer on the same channel.
#[derive(Clone, Debug)]
pub struct Heartbeat {
    tx: mpsc::Sender<Pulse>,
}

impl Heartbeat {
    pub(crate) fn new(tx: mpsc::Sender<Pulse>) -> Self {
        Self { tx }
    }

    /// Attempts to emit one pulse without waiting.
    ///
    /// Returns `true` if the pulse was queued, `false` if it was dropped because the
    /// buffer is full or the listener is gone. Neither case is an error.
    pub fn pulse(&self) -> bool {
        match self.tx.try_send(Pulse) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Closed(_)) => false,
        }
    }

    /// Returns `true` once nobody is listening for pulses.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Minimum period accepted by [`ticker`].
pub const MIN_PULSE_INTERVAL: Duration = Duration::from_millis(1);

/// Builds a pulse timer ticking every `interval`.
///
/// - The first tick is one full `interval` away (no immediate tick).
/// - Missed ticks are skipped rather than bursted.
/// - `interval` is clamped to [`MIN_PULSE_INTERVAL`].
pub fn ticker(interval: Duration) -> Interval {
    let period = interval.max(MIN_PULSE_INTERVAL);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}
