//! # Runtime events emitted by stewards.
//!
//! The [`EventKind`] enum classifies what happened:
//! - **Ward lifecycle**: a ward attempt started, missed its heartbeat, was scheduled for restart
//! - **Steward lifecycle**: a steward stopped or ran out of restart budget
//! - **Runtime**: OS shutdown requested, subscriber overflow/panic
//!
//! The [`Event`] struct carries optional metadata (steward, ward or subscriber name, attempt,
//! timeout, delay, reason) set depending on the kind.
//!
//! ## Ordering
//! Each event published through a [`Bus`](crate::Bus) gets a sequence number that increases
//! monotonically per bus. Use `seq` to restore order across subscribers.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use steward::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::HeartbeatMissed)
//!     .with_steward("poller")
//!     .with_attempt(3)
//!     .with_timeout(Duration::from_secs(2));
//!
//! assert_eq!(ev.kind, EventKind::HeartbeatMissed);
//! assert_eq!(ev.steward.as_deref(), Some("poller"));
//! assert_eq!(ev.timeout_ms, Some(2000));
//! ```

use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Ward lifecycle ===
    /// A ward attempt was started.
    ///
    /// Sets: `steward`, `ward`, `attempt` (1-based), `timeout_ms`.
    WardStarting,

    /// The monitoring window elapsed without a ward pulse; the ward is being cancelled.
    ///
    /// Sets: `steward`, `ward`, `attempt` (the silent one), `timeout_ms`.
    HeartbeatMissed,

    /// A restart was delayed by the configured backoff.
    ///
    /// Sets: `steward`, `ward`, `attempt` (the next one), `delay_ms`.
    RestartScheduled,

    // === Steward lifecycle ===
    /// The restart budget is spent; the steward stops instead of restarting.
    ///
    /// Sets: `steward`, `ward`, `attempt` (last one), `reason`.
    BudgetExhausted,

    /// The steward left its monitor loop and closed its outputs.
    ///
    /// Sets: `steward`, `ward`, `attempt` (last one), `reason`.
    StewardStopped,

    // === Runtime ===
    /// An OS termination signal was observed.
    ShutdownRequested,

    /// A subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets: `subscriber`, `reason`.
    SubscriberOverflow,

    /// A subscriber panicked while handling an event.
    ///
    /// Sets: `subscriber`, `reason` (panic message).
    SubscriberPanicked,
}

impl EventKind {
    /// Returns a short stable label (kebab-case) for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::WardStarting => "ward-starting",
            EventKind::HeartbeatMissed => "heartbeat-missed",
            EventKind::RestartScheduled => "restart-scheduled",
            EventKind::BudgetExhausted => "budget-exhausted",
            EventKind::StewardStopped => "steward-stopped",
            EventKind::ShutdownRequested => "shutdown-requested",
            EventKind::SubscriberOverflow => "subscriber-overflow",
            EventKind::SubscriberPanicked => "subscriber-panicked",
        }
    }
}

/// Runtime event with optional metadata.
#[derive(Clone, Debug)]
pub struct Event {
    /// Per-bus sequence number (assigned on publish; `0` before).
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the steward.
    pub steward: Option<Arc<str>>,
    /// Name of the supervised ward.
    pub ward: Option<Arc<str>>,
    /// Ward attempt number (starting from 1).
    pub attempt: Option<u32>,
    /// Monitoring timeout in milliseconds.
    pub timeout_ms: Option<u32>,
    /// Restart delay in milliseconds.
    pub delay_ms: Option<u32>,
    /// Human-readable reason.
    pub reason: Option<Arc<str>>,
    /// Name of the subscriber that overflowed or panicked.
    pub subscriber: Option<&'static str>,
}

impl Event {
    /// Creates an event of the given kind stamped with the current time.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: 0,
            at: SystemTime::now(),
            kind,
            steward: None,
            ward: None,
            attempt: None,
            timeout_ms: None,
            delay_ms: None,
            reason: None,
            subscriber: None,
        }
    }

    /// Attaches a steward name.
    #[inline]
    pub fn with_steward(mut self, name: impl Into<Arc<str>>) -> Self {
        self.steward = Some(name.into());
        self
    }

    /// Attaches a ward name.
    #[inline]
    pub fn with_ward(mut self, name: impl Into<Arc<str>>) -> Self {
        self.ward = Some(name.into());
        self
    }

    /// Attaches an attempt number.
    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a timeout (stored as milliseconds, saturating).
    #[inline]
    pub fn with_timeout(mut self, d: Duration) -> Self {
        self.timeout_ms = Some(saturating_ms(d));
        self
    }

    /// Attaches a delay (stored as milliseconds, saturating).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        self.delay_ms = Some(saturating_ms(d));
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates a subscriber overflow event.
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        let mut ev = Event::new(EventKind::SubscriberOverflow).with_reason(reason);
        ev.subscriber = Some(subscriber);
        ev
    }

    /// Creates a subscriber panic event.
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        let mut ev = Event::new(EventKind::SubscriberPanicked).with_reason(info);
        ev.subscriber = Some(subscriber);
        ev
    }
}

fn saturating_ms(d: Duration) -> u32 {
    d.as_millis().min(u128::from(u32::MAX)) as u32
}
