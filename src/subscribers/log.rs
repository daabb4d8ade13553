//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout, one line per event.
//!
//! ## Output format
//! ```text
//! [ward-starting] steward=outer ward=poller attempt=1 timeout=2000ms
//! [heartbeat-missed] steward=outer ward=poller attempt=1 timeout=2000ms
//! [restart-scheduled] steward=outer ward=poller attempt=2 delay=100ms
//! [budget-exhausted] steward=outer ward=poller attempt=3 reason="at most 2 restarts"
//! [steward-stopped] steward=outer ward=poller attempt=3 reason="parent canceled"
//! [shutdown-requested]
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use steward::{Bus, CancelTrigger, LogWriter, Subscribe, SubscriberSet};
//! # async fn demo() {
//! let bus = Bus::default();
//! let stop = CancelTrigger::new();
//! let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
//! let listener = SubscriberSet::listen(subs, &bus, stop.signal());
//! // ... run stewards that report to `bus` ...
//! stop.fire();
//! listener.await.unwrap().shutdown().await;
//! # }
//! ```

use async_trait::async_trait;

use crate::events::Event;
use crate::subscribers::Subscribe;

/// Stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use; implement a custom
/// [`Subscribe`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        println!("{}", render(e));
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}

fn render(e: &Event) -> String {
    let mut line = format!("[{}]", e.kind.as_label());
    if let Some(steward) = &e.steward {
        line.push_str(&format!(" steward={steward}"));
    }
    if let Some(ward) = &e.ward {
        line.push_str(&format!(" ward={ward}"));
    }
    if let Some(sub) = e.subscriber {
        line.push_str(&format!(" subscriber={sub}"));
    }
    if let Some(attempt) = e.attempt {
        line.push_str(&format!(" attempt={attempt}"));
    }
    if let Some(ms) = e.timeout_ms {
        line.push_str(&format!(" timeout={ms}ms"));
    }
    if let Some(ms) = e.delay_ms {
        line.push_str(&format!(" delay={ms}ms"));
    }
    if let Some(reason) = &e.reason {
        line.push_str(&format!(" reason={reason:?}"));
    }
    line
}
