//! # Event bus for broadcasting runtime events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] shared by every steward that
//! reports to it (nested stewards typically share one bus).
//!
//! ## Architecture
//! ```text
//! Publishers (many):                 Receivers:
//!   Steward A ──┐
//!   Steward B ──┼──────► Bus ───────► SubscriberSet listener ──► subscribers
//!   Shutdown  ──┘  (broadcast chan)   test receivers, ...
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never waits.
//! - **Sequenced**: each published event gets the next per-bus `seq`.
//! - **Bounded**: slow receivers observe `RecvError::Lagged(n)` and skip `n` events.
//! - **No persistence**: events published with no receiver are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for runtime events.
///
/// Cheap to clone; clones publish into the same channel and share the sequence counter.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
    seq: Arc<AtomicU64>,
}

impl Bus {
    /// Creates a new bus; `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self {
            tx,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Stamps `ev` with the next sequence number and broadcasts it.
    pub fn publish(&self, mut ev: Event) {
        ev.seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let _ = self.tx.send(ev);
    }

    /// Creates a receiver that observes events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for Bus {
    /// A bus with capacity 1024.
    fn default() -> Self {
        Self::new(1024)
    }
}
