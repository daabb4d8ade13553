//! # Pulse-per-item ward.
//!
//! [`SequenceWard`] emits a fixed sequence of values and pulses at the **beginning** of each
//! unit of work. The pulse is a separate non-blocking step from the send: if the consumer
//! is not ready for a result, the ward must not trade the result for a pulse.
//!
//! ```text
//! [start delay]
//! for item in items {
//!   heartbeat.pulse()          (try, never blocks)
//!   results.send(item)         (raced against cancel)
//! }
//! [hold: keep pulsing until cancelled]
//! ```
//!
//! Without `hold`, the ward exits after the last item and its pulse stream ends, so a
//! steward will start it again once the monitoring window elapses.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use tokio::{select, time};

use crate::cancel::CancelSignal;
use crate::heartbeat::{self, ticker};
use crate::wards::ward::{Ward, WardStreams};

/// Ward that delivers a fixed sequence of values.
#[derive(Debug)]
pub struct SequenceWard<T> {
    name: Cow<'static, str>,
    items: Arc<[T]>,
    start_delay: Duration,
    hold: bool,
}

impl<T> SequenceWard<T> {
    /// Creates a ward delivering `items` in order on every start.
    pub fn new(name: impl Into<Cow<'static, str>>, items: impl Into<Arc<[T]>>) -> Self {
        Self {
            name: name.into(),
            items: items.into(),
            start_delay: Duration::ZERO,
            hold: false,
        }
    }

    /// Waits `delay` (cancellably) before the first item.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Keeps pulsing after the last item instead of exiting.
    pub fn hold_when_done(mut self, hold: bool) -> Self {
        self.hold = hold;
        self
    }
}

impl<T> Ward<T> for SequenceWard<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<T> {
        let (outlet, streams) = heartbeat::channel(cancel.clone(), 1);
        let items = Arc::clone(&self.items);
        let start_delay = self.start_delay;
        let hold = self.hold;

        tokio::spawn(async move {
            if !start_delay.is_zero() {
                select! {
                    _ = cancel.fired() => return,
                    _ = time::sleep(start_delay) => {}
                }
            }
            for item in items.iter() {
                outlet.heartbeat.pulse();
                if outlet.results.send(item.clone()).await.is_err() {
                    return;
                }
            }
            if !hold {
                return;
            }
            let mut pulses = ticker(pulse_interval);
            loop {
                select! {
                    _ = cancel.fired() => return,
                    _ = pulses.tick() => {
                        outlet.heartbeat.pulse();
                    }
                }
            }
        });
        streams
    }
}
