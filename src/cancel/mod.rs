//! Cancellation signals and their combinator.
//!
//! ## Contents
//! - [`CancelTrigger`] the single writer of a one-shot signal
//! - [`CancelSignal`]  a clonable, read-only view observed by many tasks
//! - [`or`]            merges many signals into one that fires on the first
//!
//! ```text
//! CancelTrigger ──fire()──► CancelSignal ─┐
//! CancelTrigger ──fire()──► CancelSignal ─┼──► or([...]) ──► CancelSignal (derived)
//! parent scope  ──────────► CancelSignal ─┘
//! ```

mod or;
mod signal;

pub use or::or;
pub use signal::{CancelSignal, CancelTrigger};
