//! # Timed-heartbeat ward.
//!
//! [`PeriodicWard`] is the canonical heartbeat-following worker: it pulses on every tick
//! of its pulse interval, runs its unit of work once per period (two pulse intervals by
//! default), and keeps pulsing while a result waits for a slow consumer.
//!
//! ```text
//! loop {
//!   select {
//!     cancel     → exit
//!     pulse tick → heartbeat.pulse()
//!     work tick  → v = work(); send_pulsing(v)
//!   }
//! }
//! ```

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use tokio::select;

use crate::cancel::CancelSignal;
use crate::heartbeat::{self, ticker};
use crate::wards::ward::{Ward, WardStreams};

/// Ward that produces `work()` on a fixed period while pulsing in between.
pub struct PeriodicWard<F> {
    name: Cow<'static, str>,
    work: Arc<F>,
    period: Option<Duration>,
    result_capacity: usize,
}

impl<F> PeriodicWard<F> {
    /// Creates a ward running `work` every two pulse intervals.
    pub fn new(name: impl Into<Cow<'static, str>>, work: F) -> Self {
        Self {
            name: name.into(),
            work: Arc::new(work),
            period: None,
            result_capacity: 1,
        }
    }

    /// Runs the work on a fixed `period` instead of twice the pulse interval.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the result buffer size (clamped to at least 1).
    pub fn with_result_capacity(mut self, capacity: usize) -> Self {
        self.result_capacity = capacity.max(1);
        self
    }
}

impl<F, T> Ward<T> for PeriodicWard<F>
where
    F: Fn() -> T + Send + Sync + 'static,
    T: Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<T> {
        let (outlet, streams) = heartbeat::channel(cancel.clone(), self.result_capacity);
        let work = Arc::clone(&self.work);
        let period = self.period.unwrap_or(pulse_interval * 2);

        tokio::spawn(async move {
            let mut pulses = ticker(pulse_interval);
            let mut work_ticks = ticker(period);
            loop {
                select! {
                    _ = cancel.fired() => return,
                    _ = pulses.tick() => {
                        outlet.heartbeat.pulse();
                    }
                    _ = work_ticks.tick() => {
                        let value = work();
                        if outlet
                            .results
                            .send_pulsing(value, &outlet.heartbeat, &mut pulses)
                            .await
                            .is_err()
                        {
                            return;
                        }
                    }
                }
            }
        });
        streams
    }
}
