//! # Heartbeat protocol.
//!
//! A ward exposes two independent outputs:
//!
//! ```text
//!            ┌──────────── Heartbeat::pulse() ── try_send, drop on full ──► pulses  (cap ≥ 1)
//!  ward ─────┤
//!            └──────────── ResultSender::send() ── raced against cancel ──► results
//! ```
//!
//! - **Pulses are disposable.** A pulse nobody reads is skipped; only a *sustained absence*
//!   of pulses means something.
//! - **Results are not.** A computed result is delivered, or abandoned only because the
//!   cancel signal fired (or the consumer went away).
//! - A ward pulses **before** each blocking step and guards every blocking await with its
//!   cancel signal, so it stays preemptible.
//!
//! [`channel`] builds both halves for a ward in one call.

mod pulse;
mod results;

use tokio::sync::mpsc;

use crate::cancel::CancelSignal;
use crate::wards::WardStreams;

pub use pulse::{Heartbeat, MIN_PULSE_INTERVAL, Pulse, ticker};
pub use results::ResultSender;

/// Default capacity of a pulse channel: one unread pulse.
pub const PULSE_CAPACITY: usize = 1;

/// Producer half handed to the ward body.
#[derive(Debug)]
pub struct WardOutlet<T> {
    /// Lossy liveness pulses.
    pub heartbeat: Heartbeat,
    /// Lossless, cancel-guarded results.
    pub results: ResultSender<T>,
}

impl<T> WardOutlet<T> {
    /// Returns the cancel signal guarding result sends.
    pub fn cancel(&self) -> &CancelSignal {
        self.results.cancel()
    }
}

/// Creates the pulse/result channel pair for one ward attempt.
///
/// `result_capacity` is clamped to at least 1. Pulses use [`PULSE_CAPACITY`].
///
/// # Example
/// ```
/// use steward::{CancelSignal, heartbeat};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (outlet, mut streams) = heartbeat::channel::<u32>(CancelSignal::never(), 1);
/// assert!(outlet.heartbeat.pulse());
/// assert!(!outlet.heartbeat.pulse()); // buffer full, dropped
///
/// outlet.results.send(42).await.unwrap();
/// assert!(streams.pulses.recv().await.is_some());
/// assert_eq!(streams.results.recv().await, Some(42));
/// # }
/// ```
pub fn channel<T>(cancel: CancelSignal, result_capacity: usize) -> (WardOutlet<T>, WardStreams<T>) {
    channel_with(cancel, PULSE_CAPACITY, result_capacity)
}

/// Like [`channel`], with an explicit pulse capacity (clamped to at least 1).
pub fn channel_with<T>(
    cancel: CancelSignal,
    pulse_capacity: usize,
    result_capacity: usize,
) -> (WardOutlet<T>, WardStreams<T>) {
    let (pulse_tx, pulse_rx) = mpsc::channel(pulse_capacity.max(1));
    let (result_tx, result_rx) = mpsc::channel(result_capacity.max(1));

    let outlet = WardOutlet {
        heartbeat: Heartbeat::new(pulse_tx),
        results: ResultSender::new(result_tx, cancel),
    };
    let streams = WardStreams {
        pulses: pulse_rx,
        results: result_rx,
    };
    (outlet, streams)
}
