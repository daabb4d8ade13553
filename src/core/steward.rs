//! # Steward: heartbeat-supervised restarts.
//!
//! A [`Steward`] starts a [`Ward`], watches its pulses and replaces it with a fresh
//! instance whenever the ward stays silent for longer than the configured timeout.
//! A steward is itself a [`Ward`], so stewards nest: an outer steward supervises the
//! inner one exactly like any other ward.
//!
//! ## States
//! ```text
//!   Starting ──► Monitoring ──(no pulse within timeout)──► Restarting ──┐
//!      ▲                                                                │
//!      └────────────────────────(backoff elapsed)───────────────────────┘
//!
//!   any state ──(parent fired)──► Stopped
//!   Restarting ──(budget spent)──► Stopped
//! ```
//!
//! ## Monitor loop
//! ```text
//! select! {
//!   parent fired        → Stopped
//!   own ticker          → pulse upward (lossy)
//!   ward pulse          → deadline = now + timeout
//!   ward result         → hold, then forward upward
//!   deadline / backoff  → restart (or stop once the budget is spent)
//! }
//! ```
//!
//! ## Rules
//! - The ward runs under `or(ward trigger, parent)`; each attempt gets a fresh trigger,
//!   fired before the attempt's receivers are dropped.
//! - The ward pulse interval is `timeout / 2`.
//! - A closed pulse stream is not a pulse: the ward is restarted at its deadline.
//! - A result already taken from a ward is held across restarts and delivered unless the
//!   parent cancels.
//! - Missed heartbeats never surface as errors; they are published as
//!   [`EventKind::HeartbeatMissed`].

use std::fmt;
use std::future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::cancel::{self, CancelSignal, CancelTrigger};
use crate::core::config::StewardConfig;
use crate::error::ConfigError;
use crate::events::{Bus, Event, EventKind};
use crate::heartbeat::{self, Pulse, WardOutlet, ticker};
use crate::policies::{BackoffPolicy, RestartBudget};
use crate::wards::{Ward, WardRef, WardStreams};

/// Supervisor that restarts its ward on missed heartbeats.
///
/// Built with [`Steward::builder`]. Implements [`Ward`], so starting a steward looks
/// exactly like starting the ward it guards.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use steward::{CancelSignal, PeriodicWard, Steward, Ward};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let ward = PeriodicWard::new("answer", || 42u32).with_period(Duration::from_millis(10));
/// let steward = Steward::builder(ward)
///     .timeout(Duration::from_secs(1))
///     .build()
///     .unwrap();
///
/// let mut streams = steward.start(CancelSignal::never(), Duration::from_millis(500));
/// assert_eq!(streams.results.recv().await, Some(42));
/// # }
/// ```
pub struct Steward<T> {
    name: Arc<str>,
    ward: WardRef<T>,
    config: StewardConfig,
    bus: Option<Bus>,
}

impl<T: Send + 'static> Steward<T> {
    /// Starts building a steward for `ward`.
    pub fn builder<W: Ward<T>>(ward: W) -> StewardBuilder<T> {
        StewardBuilder::new(Arc::new(ward))
    }

    /// Returns the configuration this steward runs with.
    pub fn config(&self) -> &StewardConfig {
        &self.config
    }
}

impl<T: 'static> fmt::Debug for Steward<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steward")
            .field("name", &self.name)
            .field("ward", &self.ward.name())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Send + 'static> Ward<T> for Steward<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<T> {
        let (outlet, streams) = heartbeat::channel_with(
            cancel.clone(),
            self.config.pulse_capacity,
            self.config.result_capacity,
        );
        let monitor = Monitor {
            steward: Arc::clone(&self.name),
            ward_name: Arc::from(self.ward.name()),
            ward: Arc::clone(&self.ward),
            config: self.config.clone(),
            bus: self.bus.clone(),
            parent: cancel,
            outlet,
        };
        tokio::spawn(monitor.run(pulse_interval));
        streams
    }
}

/// Builder for [`Steward`].
///
/// Every setting defaults to [`StewardConfig::default`]; the name defaults to
/// `steward(<ward name>)`.
pub struct StewardBuilder<T> {
    ward: WardRef<T>,
    name: Option<Arc<str>>,
    config: StewardConfig,
    bus: Option<Bus>,
}

impl<T: Send + 'static> StewardBuilder<T> {
    /// Starts a builder for an already shared ward.
    pub fn new(ward: WardRef<T>) -> Self {
        Self {
            ward,
            name: None,
            config: StewardConfig::default(),
            bus: None,
        }
    }

    /// Sets the steward name used in events and by an outer steward.
    pub fn name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: StewardConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the silence window after which the ward is restarted.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Caps the number of restarts.
    pub fn budget(mut self, budget: RestartBudget) -> Self {
        self.config.budget = budget;
        self
    }

    /// Waits according to `backoff` before each restart.
    pub fn backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.config.backoff = Some(backoff);
        self
    }

    /// Sets the capacity of the steward's own pulse channel.
    pub fn pulse_capacity(mut self, capacity: usize) -> Self {
        self.config.pulse_capacity = capacity;
        self
    }

    /// Sets the capacity of the steward's own result channel.
    pub fn result_capacity(mut self, capacity: usize) -> Self {
        self.config.result_capacity = capacity;
        self
    }

    /// Publishes lifecycle events on `bus`.
    pub fn bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Validates the configuration and builds the steward.
    pub fn build(self) -> Result<Steward<T>, ConfigError> {
        self.config.validate()?;
        let name = match self.name {
            Some(name) => name,
            None => Arc::from(format!("steward({})", self.ward.name())),
        };
        Ok(Steward {
            name,
            ward: self.ward,
            config: self.config,
            bus: self.bus,
        })
    }
}

/// The steward's record of the live ward attempt.
struct WardHandle<T> {
    trigger: CancelTrigger,
    pulses: Option<mpsc::Receiver<Pulse>>,
    results: Option<mpsc::Receiver<T>>,
    attempt: u32,
}

impl<T> WardHandle<T> {
    /// Cancels the attempt and stops listening to it.
    fn halt(&mut self) {
        self.trigger.fire();
        self.pulses = None;
        self.results = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Monitoring,
    Restarting,
}

/// One running steward instance.
struct Monitor<T> {
    steward: Arc<str>,
    ward_name: Arc<str>,
    ward: WardRef<T>,
    config: StewardConfig,
    bus: Option<Bus>,
    parent: CancelSignal,
    outlet: WardOutlet<T>,
}

impl<T: Send + 'static> Monitor<T> {
    async fn run(self, pulse_interval: Duration) {
        let timeout = self.config.timeout;
        let mut own_pulses = ticker(pulse_interval);
        let mut current = self.launch(1);
        let mut phase = Phase::Monitoring;
        let mut pending: Option<T> = None;
        let mut forwarding = true;

        let timer = time::sleep_until(Instant::now() + timeout);
        tokio::pin!(timer);

        let reason = loop {
            tokio::select! {
                _ = self.parent.fired() => break "parent canceled",

                _ = own_pulses.tick() => {
                    self.outlet.heartbeat.pulse();
                }

                pulse = recv_some(&mut current.pulses) => match pulse {
                    Some(Pulse) => {
                        if phase == Phase::Monitoring {
                            timer.as_mut().reset(Instant::now() + timeout);
                        }
                    }
                    None => current.pulses = None,
                },

                result = recv_some(&mut current.results), if pending.is_none() => match result {
                    Some(value) if forwarding => pending = Some(value),
                    Some(_) => {}
                    None => current.results = None,
                },

                permit = self.outlet.results.reserve(), if forwarding && pending.is_some() => {
                    match permit {
                        Ok(permit) => {
                            if let Some(value) = pending.take() {
                                permit.send(value);
                            }
                        }
                        Err(_) => {
                            forwarding = false;
                            pending = None;
                        }
                    }
                }

                _ = &mut timer => match phase {
                    Phase::Monitoring => {
                        self.publish(
                            Event::new(EventKind::HeartbeatMissed)
                                .with_attempt(current.attempt)
                                .with_timeout(timeout),
                        );
                        current.halt();

                        let performed = current.attempt - 1;
                        if !self.config.budget.allows(performed) {
                            self.publish(
                                Event::new(EventKind::BudgetExhausted)
                                    .with_attempt(current.attempt)
                                    .with_reason(format!("{performed} restarts spent")),
                            );
                            break "restart budget exhausted";
                        }

                        match self.config.restart_delay(performed) {
                            Some(delay) => {
                                self.publish(
                                    Event::new(EventKind::RestartScheduled)
                                        .with_attempt(current.attempt + 1)
                                        .with_delay(delay),
                                );
                                timer.as_mut().reset(Instant::now() + delay);
                                phase = Phase::Restarting;
                            }
                            None => {
                                current = self.launch(current.attempt + 1);
                                timer.as_mut().reset(Instant::now() + timeout);
                            }
                        }
                    }
                    Phase::Restarting => {
                        current = self.launch(current.attempt + 1);
                        timer.as_mut().reset(Instant::now() + timeout);
                        phase = Phase::Monitoring;
                    }
                },
            }
        };

        current.halt();
        self.publish(
            Event::new(EventKind::StewardStopped)
                .with_attempt(current.attempt)
                .with_reason(reason),
        );

        // Pulses end now; the results stream ends once the held value is handed over.
        let WardOutlet { heartbeat, results } = self.outlet;
        drop(heartbeat);
        if let Some(value) = pending.filter(|_| forwarding) {
            let _ = results.send(value).await;
        }
    }

    /// Starts attempt number `attempt` under `or(fresh trigger, parent)`.
    fn launch(&self, attempt: u32) -> WardHandle<T> {
        let trigger = CancelTrigger::new();
        let effective = cancel::or([trigger.signal(), self.parent.clone()]);

        self.publish(
            Event::new(EventKind::WardStarting)
                .with_attempt(attempt)
                .with_timeout(self.config.timeout),
        );
        let (pulses, results) = self
            .ward
            .start(effective, self.config.ward_pulse_interval())
            .into_parts();

        WardHandle {
            trigger,
            pulses: Some(pulses),
            results: Some(results),
            attempt,
        }
    }

    fn publish(&self, ev: Event) {
        if let Some(bus) = &self.bus {
            bus.publish(
                ev.with_steward(Arc::clone(&self.steward))
                    .with_ward(Arc::clone(&self.ward_name)),
            );
        }
    }
}

/// Receives from `rx`, or never completes once the receiver is gone.
async fn recv_some<U>(rx: &mut Option<mpsc::Receiver<U>>) -> Option<U> {
    match rx {
        Some(rx) => rx.recv().await,
        None => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wards::{PeriodicWard, SequenceWard, WardFn};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::time::timeout;

    /// A ward that never pulses and counts how often it is started and halted.
    fn hung_ward(
        starts: Arc<AtomicU64>,
        halts: Arc<AtomicU64>,
    ) -> WardFn<impl Fn(CancelSignal, Duration) -> WardStreams<u32> + Send + Sync + 'static, u32>
    {
        WardFn::new("hung", move |cancel: CancelSignal, _: Duration| {
            starts.fetch_add(1, Ordering::SeqCst);
            let (outlet, streams) = heartbeat::channel::<u32>(cancel.clone(), 1);
            let halts = Arc::clone(&halts);
            tokio::spawn(async move {
                cancel.fired().await;
                halts.fetch_add(1, Ordering::SeqCst);
                drop(outlet);
            });
            streams
        })
    }

    fn counting<T: Send + 'static>(inner: impl Ward<T>, starts: Arc<AtomicU64>) -> impl Ward<T> {
        WardFn::<_, T>::new("counting", move |cancel: CancelSignal, interval: Duration| {
            starts.fetch_add(1, Ordering::SeqCst);
            inner.start(cancel, interval)
        })
    }

    async fn drain<T>(streams: &mut WardStreams<T>) {
        while streams.pulses.recv().await.is_some() {}
        while streams.results.recv().await.is_some() {}
    }

    #[tokio::test(start_paused = true)]
    async fn hung_ward_is_halted_once_per_window() {
        let starts = Arc::new(AtomicU64::new(0));
        let halts = Arc::new(AtomicU64::new(0));
        let steward = Steward::builder(hung_ward(starts.clone(), halts.clone()))
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let parent = CancelSignal::after(Duration::from_millis(5_999));
        let mut streams = steward.start(parent, Duration::from_secs(1));
        drain(&mut streams).await;
        time::sleep(Duration::from_millis(10)).await;

        assert_eq!(starts.load(Ordering::SeqCst), 3);
        assert_eq!(halts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn faithful_ward_is_never_restarted() {
        let starts = Arc::new(AtomicU64::new(0));
        let ward = PeriodicWard::new("steady", || 1u8);
        let steward = Steward::builder(counting(ward, starts.clone()))
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let trigger = CancelTrigger::new();
        let mut streams = steward.start(trigger.signal(), Duration::from_secs(1));

        let mut results = 0;
        let window = timeout(Duration::from_secs(60), async {
            while streams.results.recv().await.is_some() {
                results += 1;
            }
        })
        .await;
        assert!(window.is_err());
        assert!(results >= 25, "got {results} results");
        assert_eq!(starts.load(Ordering::SeqCst), 1);

        trigger.fire();
        drain(&mut streams).await;
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_exact_sequence() {
        let ward = SequenceWard::new("primes", vec![2, 3, 5, 7, 11, 13]).hold_when_done(true);
        let steward = Steward::builder(ward)
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();

        let trigger = CancelTrigger::new();
        let mut streams = steward.start(trigger.signal(), Duration::from_millis(500));

        let mut got = Vec::new();
        for _ in 0..6 {
            got.push(streams.results.recv().await.unwrap());
        }
        assert_eq!(got, vec![2, 3, 5, 7, 11, 13]);

        let extra = timeout(Duration::from_secs(10), streams.results.recv()).await;
        assert!(extra.is_err(), "healthy ward was restarted and replayed");

        trigger.fire();
        assert_eq!(streams.results.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn nested_steward_keeps_healthy_inner() {
        let leaf_starts = Arc::new(AtomicU64::new(0));
        let inner_starts = Arc::new(AtomicU64::new(0));

        let leaf = counting(PeriodicWard::new("leaf", || 'x'), leaf_starts.clone());
        let inner = Steward::builder(leaf)
            .name("inner")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let outer = Steward::builder(counting(inner, inner_starts.clone()))
            .name("outer")
            .timeout(Duration::from_secs(4))
            .build()
            .unwrap();

        let trigger = CancelTrigger::new();
        let mut streams = outer.start(trigger.signal(), Duration::from_secs(2));

        let window = timeout(Duration::from_secs(60), async {
            while streams.results.recv().await.is_some() {}
        })
        .await;
        assert!(window.is_err());
        assert_eq!(inner_starts.load(Ordering::SeqCst), 1);
        assert_eq!(leaf_starts.load(Ordering::SeqCst), 1);

        trigger.fire();
        drain(&mut streams).await;
    }

    #[tokio::test(start_paused = true)]
    async fn nested_steward_heals_hung_leaf() {
        let starts = Arc::new(AtomicU64::new(0));
        let halts = Arc::new(AtomicU64::new(0));

        let inner = Steward::builder(hung_ward(starts.clone(), halts.clone()))
            .name("inner")
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        let outer_starts = Arc::new(AtomicU64::new(0));
        let outer = Steward::builder(counting(inner, outer_starts.clone()))
            .name("outer")
            .timeout(Duration::from_secs(4))
            .build()
            .unwrap();

        let parent = CancelSignal::after(Duration::from_millis(4_500));
        let mut streams = outer.start(parent, Duration::from_secs(2));
        drain(&mut streams).await;
        time::sleep(Duration::from_millis(10)).await;

        assert_eq!(outer_starts.load(Ordering::SeqCst), 1);
        assert_eq!(starts.load(Ordering::SeqCst), 5);
        assert_eq!(halts.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn budget_stops_the_steward() {
        let starts = Arc::new(AtomicU64::new(0));
        let halts = Arc::new(AtomicU64::new(0));
        let bus = Bus::new(64);
        let mut rx = bus.subscribe();
        let steward = Steward::builder(hung_ward(starts.clone(), halts.clone()))
            .timeout(Duration::from_secs(2))
            .budget(RestartBudget::AtMost(2))
            .bus(bus)
            .build()
            .unwrap();

        let begin = Instant::now();
        let mut streams = steward.start(CancelSignal::never(), Duration::from_secs(1));
        drain(&mut streams).await;

        assert_eq!(begin.elapsed(), Duration::from_secs(6));
        assert_eq!(starts.load(Ordering::SeqCst), 3);

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        assert_eq!(kinds.last(), Some(&EventKind::StewardStopped));
        assert!(kinds.contains(&EventKind::BudgetExhausted));
    }

    #[tokio::test(start_paused = true)]
    async fn budget_stop_ends_pulses_and_delivers_held_result() {
        let ward = WardFn::new("burst-then-hang", |cancel: CancelSignal, _: Duration| {
            let (outlet, streams) = heartbeat::channel::<u32>(cancel.clone(), 4);
            tokio::spawn(async move {
                for v in [1, 2] {
                    if outlet.results.send(v).await.is_err() {
                        return;
                    }
                }
                cancel.fired().await;
            });
            streams
        });
        let steward = Steward::builder(ward)
            .timeout(Duration::from_secs(2))
            .budget(RestartBudget::AtMost(0))
            .build()
            .unwrap();

        let mut streams = steward.start(CancelSignal::never(), Duration::from_secs(1));

        let pulses_ended = timeout(Duration::from_secs(30), async {
            while streams.pulses.recv().await.is_some() {}
        })
        .await;
        assert!(pulses_ended.is_ok(), "pulse stream open after budget stop");

        assert_eq!(streams.results.recv().await, Some(1));
        assert_eq!(streams.results.recv().await, Some(2));
        assert_eq!(streams.results.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_delays_restarts() {
        let started_at = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&started_at);
        let begin = Instant::now();
        let ward = WardFn::new("silent", move |cancel: CancelSignal, _: Duration| {
            log.lock().unwrap().push(begin.elapsed());
            let (outlet, streams) = heartbeat::channel::<()>(cancel.clone(), 1);
            tokio::spawn(async move {
                cancel.fired().await;
                drop(outlet);
            });
            streams
        });
        let steward = Steward::builder(ward)
            .timeout(Duration::from_secs(2))
            .backoff(BackoffPolicy::constant(Duration::from_secs(1)))
            .build()
            .unwrap();

        let parent = CancelSignal::after(Duration::from_millis(6_500));
        let mut streams = steward.start(parent, Duration::from_secs(1));
        drain(&mut streams).await;

        let secs: Vec<u64> = started_at
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.as_secs())
            .collect();
        assert_eq!(secs, vec![0, 3, 6]);
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_lifecycle_events() {
        let bus = Bus::new(64);
        let mut rx = bus.subscribe();
        let steward = Steward::builder(hung_ward(Arc::default(), Arc::default()))
            .name("guard")
            .timeout(Duration::from_secs(2))
            .bus(bus)
            .build()
            .unwrap();

        let parent = CancelSignal::after(Duration::from_millis(2_500));
        let mut streams = steward.start(parent, Duration::from_secs(1));
        drain(&mut streams).await;

        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::WardStarting,
                EventKind::HeartbeatMissed,
                EventKind::WardStarting,
                EventKind::StewardStopped,
            ]
        );
        let attempts: Vec<Option<u32>> = events.iter().map(|e| e.attempt).collect();
        assert_eq!(attempts, vec![Some(1), Some(1), Some(2), Some(2)]);
        assert!(events.iter().all(|e| e.steward.as_deref() == Some("guard")));
        assert!(events.iter().all(|e| e.ward.as_deref() == Some("hung")));
        assert_eq!(events[3].reason.as_deref(), Some("parent canceled"));
    }

    #[tokio::test(start_paused = true)]
    async fn steward_pulses_while_ward_is_hung() {
        let steward = Steward::builder(hung_ward(Arc::default(), Arc::default()))
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let trigger = CancelTrigger::new();
        let mut streams = steward.start(trigger.signal(), Duration::from_millis(500));
        for _ in 0..10 {
            let pulse = timeout(Duration::from_millis(600), streams.pulses.recv()).await;
            assert!(matches!(pulse, Ok(Some(_))));
        }
        trigger.fire();
        drain(&mut streams).await;
    }

    #[tokio::test(start_paused = true)]
    async fn held_result_survives_restart() {
        let starts = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&starts);
        let ward = WardFn::new("burst-then-hang", move |cancel: CancelSignal, _: Duration| {
            let first = counter.fetch_add(1, Ordering::SeqCst) == 0;
            let (outlet, streams) = heartbeat::channel::<u32>(cancel.clone(), 1);
            tokio::spawn(async move {
                if first {
                    for v in [1, 2] {
                        if outlet.results.send(v).await.is_err() {
                            return;
                        }
                    }
                }
                cancel.fired().await;
            });
            streams
        });
        let steward = Steward::builder(ward)
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let trigger = CancelTrigger::new();
        let mut streams = steward.start(trigger.signal(), Duration::from_secs(1));

        time::sleep(Duration::from_secs(3)).await;
        assert_eq!(starts.load(Ordering::SeqCst), 2);
        assert_eq!(streams.results.recv().await, Some(1));
        assert_eq!(streams.results.recv().await, Some(2));

        trigger.fire();
        drain(&mut streams).await;
    }

    #[tokio::test]
    async fn parent_cancel_ends_both_streams() {
        let trigger = CancelTrigger::new();
        trigger.fire();
        let steward = Steward::builder(PeriodicWard::new("p", || 0i64))
            .build()
            .unwrap();

        let mut streams = steward.start(trigger.signal(), Duration::from_millis(50));
        let ended = timeout(Duration::from_secs(5), drain(&mut streams)).await;
        assert!(ended.is_ok());
    }

    #[test]
    fn build_rejects_zero_timeout() {
        let err = Steward::builder(PeriodicWard::new("p", || ()))
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }

    #[test]
    fn default_name_wraps_ward_name() {
        let steward = Steward::builder(PeriodicWard::new("poller", || ()))
            .build()
            .unwrap();
        assert_eq!(Ward::<()>::name(&steward), "steward(poller)");
    }

    #[test]
    fn debug_shows_names() {
        let steward = Steward::builder(PeriodicWard::new("poller", || 0u16))
            .name("guard")
            .build()
            .unwrap();
        let text = format!("{steward:?}");
        assert!(text.contains("\"guard\""));
        assert!(text.contains("\"poller\""));
    }
}
