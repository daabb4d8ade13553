//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to publish/subscribe
//! to events emitted by stewards, the shutdown listener and subscriber workers.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Steward` monitor loops, `core::shutdown`, `SubscriberSet` workers
//!   (overflow/panic).
//! - **Consumers**: `SubscriberSet::listen` (fans out to subscribers) and any receiver
//!   obtained from [`Bus::subscribe`].

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
