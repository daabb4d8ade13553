//! # Non-blocking event fan-out to multiple subscribers.
//!
//! [`SubscriberSet`] distributes events to several subscribers without awaiting them.
//!
//! ## Architecture
//! ```text
//! Bus ──► listener ──► emit(event)
//!                          │
//!                          ├──► [queue 1] ──► worker 1 ──► subscriber1.on_event()
//!                          │    (bounded)         └──────► panic → SubscriberPanicked
//!                          ├──► [queue 2] ──► worker 2 ──► subscriber2.on_event()
//!                          └──► [queue N] ──► worker N ──► subscriberN.on_event()
//! ```
//!
//! ## Rules
//! - **Non-blocking**: `emit()` uses `try_send` and returns immediately.
//! - **Per-subscriber FIFO**; no ordering across subscribers.
//! - **Overflow**: the event is dropped for that subscriber only and `SubscriberOverflow`
//!   is published (never for an overflow event itself).
//! - **Isolation**: a panicking subscriber is reported and keeps receiving events.

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::cancel::CancelSignal;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::Subscribe;

struct SubscriberChannel {
    name: &'static str,
    sender: mpsc::Sender<Arc<Event>>,
}

/// Fan-out coordinator for event subscribers.
pub struct SubscriberSet {
    channels: Vec<SubscriberChannel>,
    workers: Vec<JoinHandle<()>>,
    bus: Bus,
}

impl SubscriberSet {
    /// Creates the set and spawns one worker per subscriber.
    ///
    /// `bus` receives overflow/panic reports. Must be called within a tokio runtime.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>, bus: Bus) -> Self {
        let mut channels = Vec::with_capacity(subs.len());
        let mut workers = Vec::with_capacity(subs.len());

        for sub in subs {
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<Event>>(sub.queue_capacity().max(1));
            let report = bus.clone();

            workers.push(tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let handled = std::panic::AssertUnwindSafe(sub.on_event(&ev))
                        .catch_unwind()
                        .await;
                    if let Err(panic) = handled {
                        let info = if let Some(msg) = panic.downcast_ref::<&'static str>() {
                            (*msg).to_string()
                        } else if let Some(msg) = panic.downcast_ref::<String>() {
                            msg.clone()
                        } else {
                            "unknown panic".to_string()
                        };
                        report.publish(Event::subscriber_panicked(sub.name(), info));
                    }
                }
            }));
            channels.push(SubscriberChannel { name, sender: tx });
        }

        Self {
            channels,
            workers,
            bus,
        }
    }

    /// Creates the set and forwards every event published on `bus` to it until `stop` fires.
    ///
    /// Events already queued on the bus are forwarded before `stop` is honored. The set is
    /// returned through the [`JoinHandle`] so callers can [`shutdown`](Self::shutdown) it.
    pub fn listen(
        subs: Vec<Arc<dyn Subscribe>>,
        bus: &Bus,
        stop: CancelSignal,
    ) -> JoinHandle<SubscriberSet> {
        let mut rx = bus.subscribe();
        let set = SubscriberSet::new(subs, bus.clone());
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    ev = rx.recv() => match ev {
                        Ok(ev) => set.emit(ev),
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                    _ = stop.fired() => break,
                }
            }
            set
        })
    }

    /// Number of subscribers in the set.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if the set has no subscribers.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Delivers `event` to every subscriber queue without waiting.
    pub fn emit(&self, event: Event) {
        let event = Arc::new(event);
        let is_overflow = event.kind == EventKind::SubscriberOverflow;

        for channel in &self.channels {
            let reason = match channel.sender.try_send(Arc::clone(&event)) {
                Ok(()) => continue,
                Err(mpsc::error::TrySendError::Full(_)) => "full",
                Err(mpsc::error::TrySendError::Closed(_)) => "closed",
            };
            if !is_overflow {
                self.bus
                    .publish(Event::subscriber_overflow(channel.name, reason));
            }
        }
    }

    /// Closes all queues and waits for the workers to drain them.
    pub async fn shutdown(self) {
        drop(self.channels);
        for worker in self.workers {
            let _ = worker.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelTrigger;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<EventKind>>,
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, ev: &Event) {
            self.seen.lock().unwrap().push(ev.kind);
        }
        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Exploder;

    #[async_trait]
    impl Subscribe for Exploder {
        async fn on_event(&self, ev: &Event) {
            if ev.kind == EventKind::WardStarting {
                panic!("boom");
            }
        }
        fn name(&self) -> &'static str {
            "exploder"
        }
    }

    struct Stuck;

    #[async_trait]
    impl Subscribe for Stuck {
        async fn on_event(&self, _ev: &Event) {
            std::future::pending::<()>().await;
        }
        fn name(&self) -> &'static str {
            "stuck"
        }
        fn queue_capacity(&self) -> usize {
            1
        }
    }

    #[tokio::test]
    async fn delivers_in_order_and_drains_on_shutdown() {
        let rec = Arc::new(Recorder::default());
        let subs: Vec<Arc<dyn Subscribe>> = vec![rec.clone()];
        let set = SubscriberSet::new(subs, Bus::new(16));
        assert_eq!(set.len(), 1);

        set.emit(Event::new(EventKind::WardStarting));
        set.emit(Event::new(EventKind::HeartbeatMissed));
        set.emit(Event::new(EventKind::StewardStopped));
        set.shutdown().await;

        assert_eq!(
            *rec.seen.lock().unwrap(),
            vec![
                EventKind::WardStarting,
                EventKind::HeartbeatMissed,
                EventKind::StewardStopped
            ]
        );
    }

    #[tokio::test]
    async fn panic_is_reported_and_worker_survives() {
        let bus = Bus::new(16);
        let mut rx = bus.subscribe();
        let rec = Arc::new(Recorder::default());
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Exploder), rec.clone()];
        let set = SubscriberSet::new(subs, bus.clone());

        set.emit(Event::new(EventKind::WardStarting));
        let report = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.kind, EventKind::SubscriberPanicked);
        assert_eq!(report.subscriber, Some("exploder"));
        assert!(report.steward.is_none());
        assert_eq!(report.reason.as_deref(), Some("boom"));

        set.emit(Event::new(EventKind::StewardStopped));
        set.shutdown().await;
        assert_eq!(rec.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn overflow_is_reported() {
        let bus = Bus::new(16);
        let mut rx = bus.subscribe();
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Stuck)];
        let set = SubscriberSet::new(subs, bus.clone());

        for _ in 0..4 {
            set.emit(Event::new(EventKind::WardStarting));
        }
        let report = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.kind, EventKind::SubscriberOverflow);
        assert_eq!(report.reason.as_deref(), Some("full"));
        assert_eq!(report.subscriber, Some("stuck"));
    }

    #[tokio::test]
    async fn listen_forwards_bus_events() {
        let bus = Bus::new(16);
        let rec = Arc::new(Recorder::default());
        let stop = CancelTrigger::new();
        let subs: Vec<Arc<dyn Subscribe>> = vec![rec.clone()];
        let listener = SubscriberSet::listen(subs, &bus, stop.signal());

        bus.publish(Event::new(EventKind::ShutdownRequested));
        stop.fire();

        let set = listener.await.unwrap();
        set.shutdown().await;
        assert_eq!(*rec.seen.lock().unwrap(), vec![EventKind::ShutdownRequested]);
    }
}
