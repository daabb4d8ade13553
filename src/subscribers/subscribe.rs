//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers into a steward
//! tree. Each subscriber is driven by a dedicated worker loop fed by a bounded queue owned
//! by the [`SubscriberSet`](crate::SubscriberSet).
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching); they never block a steward's monitor
//!   loop nor other subscribers.
//! - Each subscriber declares its preferred queue capacity via
//!   [`Subscribe::queue_capacity`]. On overflow, events for that subscriber are dropped and
//!   a `SubscriberOverflow` event is published.
//!
//! ## Example
//! ```rust
//! use steward::{Event, EventKind, Subscribe};
//!
//! struct Pager;
//!
//! #[async_trait::async_trait]
//! impl Subscribe for Pager {
//!     async fn on_event(&self, ev: &Event) {
//!         if ev.kind == EventKind::BudgetExhausted {
//!             // page someone...
//!         }
//!     }
//!     fn name(&self) -> &'static str { "pager" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from a subscriber-dedicated worker task. Avoid blocking the async runtime.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for overflow/panic events).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred capacity of this subscriber's queue.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
