//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out and the
//! built-in [`LogWriter`] (feature `logging`).
//!
//! ## Architecture
//! ```text
//!   Steward ── publish(Event) ──► Bus ──► SubscriberSet::listen
//!                                              │
//!                                   ┌──────────┼──────────┐
//!                                   ▼          ▼          ▼
//!                               LogWriter   Metrics    Custom ...
//! ```
//!
//! Subscribers observe; they never influence a steward's decisions.

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
