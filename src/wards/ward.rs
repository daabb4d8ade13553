//! # Ward trait: the start-function shape.
//!
//! A ward is anything that can be started with a cancel signal and a pulse interval and
//! answers with two streams: lossy pulses and lossless results. A
//! [`Steward`](crate::Steward) is itself a `Ward`, which is what makes supervisors nest.
//!
//! ```text
//! start(cancel, pulse_interval) ──► WardStreams { pulses, results }
//! ```
//!
//! ## Contract for implementors
//! - Return immediately; do the work on a spawned task.
//! - Pulse at least once per `pulse_interval` while healthy.
//! - Stop promptly once `cancel` fires and drop both senders so the streams end.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::cancel::CancelSignal;
use crate::heartbeat::Pulse;

/// Outputs of one started ward.
#[derive(Debug)]
pub struct WardStreams<T> {
    /// Liveness pulses (lossy, small buffer).
    pub pulses: mpsc::Receiver<Pulse>,
    /// Work results, in production order.
    pub results: mpsc::Receiver<T>,
}

impl<T> WardStreams<T> {
    /// Splits into `(pulses, results)`.
    pub fn into_parts(self) -> (mpsc::Receiver<Pulse>, mpsc::Receiver<T>) {
        (self.pulses, self.results)
    }
}

/// # Startable, heartbeat-emitting unit of work.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use steward::{CancelSignal, Ward, WardStreams, heartbeat};
///
/// struct Ticker;
///
/// impl Ward<u64> for Ticker {
///     fn name(&self) -> &str { "ticker" }
///
///     fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<u64> {
///         let (outlet, streams) = heartbeat::channel(cancel.clone(), 1);
///         tokio::spawn(async move {
///             let mut pulses = heartbeat::ticker(pulse_interval);
///             let mut n = 0;
///             loop {
///                 tokio::select! {
///                     _ = cancel.fired() => return,
///                     _ = pulses.tick() => { outlet.heartbeat.pulse(); }
///                 }
///                 n += 1;
///                 if outlet.results.send(n).await.is_err() {
///                     return;
///                 }
///             }
///         });
///         streams
///     }
/// }
/// ```
pub trait Ward<T>: Send + Sync + 'static {
    /// Returns a stable, human-readable ward name.
    fn name(&self) -> &str;

    /// Starts one instance of the ward.
    ///
    /// Must be called within a tokio runtime.
    fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<T>;
}

/// Shared handle to a ward.
pub type WardRef<T> = Arc<dyn Ward<T>>;

impl<T, W> Ward<T> for Arc<W>
where
    W: Ward<T> + ?Sized,
    T: 'static,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<T> {
        (**self).start(cancel, pulse_interval)
    }
}
