//! # steward
//!
//! **Steward** is a small library for health-supervised async workers in Rust.
//!
//! A worker (a [`Ward`]) reports liveness through a lossy heartbeat stream next to its
//! lossless result stream. A [`Steward`] starts the ward, watches the heartbeat and
//! replaces the ward with a fresh instance whenever it stays silent for too long. Because
//! a steward exposes the very same start-function shape, stewards nest into supervision
//! trees.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                       parent CancelSignal (e.g. cancel_on_shutdown)
//!                                   │
//!                                   ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Steward (monitor loop)                                          │
//! │  - own pulse ticker  ──► pulses ──────────────────────► caller   │
//! │  - held result       ──► results ─────────────────────► caller   │
//! │  - deadline timer    (reset by every ward pulse)                 │
//! │  - Bus               (WardStarting, HeartbeatMissed, ...)        │
//! └──────┬──────────────────────────▲─────────────────────▲──────────┘
//!        │ start(or(trigger,        │ pulses (lossy)      │ results
//!        │   parent), timeout / 2)  │                     │
//!        ▼                          │                     │
//!     ┌──────────────────────────────────────────────────────┐
//!     │  Ward attempt #n  (any Ward, including a Steward)     │
//!     └──────────────────────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Steward::start(parent, interval)
//!
//! loop {
//!   ├─► publish WardStarting{ attempt }
//!   ├─► ward.start(or(trigger, parent), timeout / 2)
//!   ├─► monitor:
//!   │       ├─ ward pulse        ─► deadline = now + timeout
//!   │       ├─ ward result       ─► forward to caller
//!   │       ├─ own tick          ─► pulse to caller
//!   │       └─ deadline elapsed  ─► publish HeartbeatMissed, fire trigger
//!   │                               ├─ budget spent ─► BudgetExhausted, exit
//!   │                               ├─ backoff      ─► RestartScheduled, wait
//!   │                               └─ continue
//!   └─ exit: parent fired ─► StewardStopped, streams end
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                                       | Key types / functions                        |
//! |-------------------|-------------------------------------------------------------------|----------------------------------------------|
//! | **Cancellation**  | One-shot broadcast signals and their any-of combinator.           | [`CancelSignal`], [`CancelTrigger`], [`cancel::or`] |
//! | **Streams**       | Cancel-aware stream plumbing.                                     | [`streams::or_done`], [`streams::bridge`], [`streams::tee`] |
//! | **Heartbeats**    | Lossy pulses plus cancel-guarded results.                         | [`Heartbeat`], [`ResultSender`], [`heartbeat::channel`] |
//! | **Wards**         | Units of work following the heartbeat protocol.                   | [`Ward`], [`WardFn`], [`PeriodicWard`], [`SequenceWard`] |
//! | **Supervision**   | Restart wards that go silent; nestable.                           | [`Steward`], [`StewardBuilder`]              |
//! | **Policies**      | Optional restart budget and backoff.                              | [`RestartBudget`], [`BackoffPolicy`], [`JitterPolicy`] |
//! | **Subscriber API**| Observe lifecycle events.                                         | [`Bus`], [`Subscribe`], [`SubscriberSet`]    |
//! | **Configuration** | Per-steward settings.                                             | [`StewardConfig`]                            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use steward::{CancelTrigger, PeriodicWard, Steward, Ward};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ward = PeriodicWard::new("sampler", || 7u32).with_period(Duration::from_millis(20));
//!     let steward = Steward::builder(ward)
//!         .timeout(Duration::from_millis(200))
//!         .build()?;
//!
//!     let stop = CancelTrigger::new();
//!     let mut streams = steward.start(stop.signal(), Duration::from_millis(100));
//!
//!     assert_eq!(streams.results.recv().await, Some(7));
//!     stop.fire();
//!     while streams.results.recv().await.is_some() {}
//!     Ok(())
//! }
//! ```

pub mod cancel;
mod core;
mod error;
mod events;
pub mod heartbeat;
mod policies;
pub mod streams;
mod subscribers;
mod wards;

// ---- Public re-exports ----

pub use cancel::{CancelSignal, CancelTrigger};
pub use self::core::{Steward, StewardBuilder, StewardConfig, cancel_on_shutdown};
pub use error::{ConfigError, SendError};
pub use events::{Bus, Event, EventKind};
pub use heartbeat::{Heartbeat, Pulse, ResultSender, WardOutlet};
pub use policies::{BackoffPolicy, JitterPolicy, RestartBudget};
pub use subscribers::{Subscribe, SubscriberSet};
pub use wards::{PeriodicWard, SequenceWard, Ward, WardFn, WardRef, WardStreams};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
