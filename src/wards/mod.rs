//! # Ward abstractions.
//!
//! This module provides the ward-related types:
//! - [`Ward`] - trait for a startable unit of work that follows the heartbeat protocol
//! - [`WardStreams`] - the pulse/result pair a started ward hands back
//! - [`WardFn`] - closure-backed ward implementation
//! - [`WardRef`] - shared reference to a ward (`Arc<dyn Ward<T>>`)
//! - [`PeriodicWard`] - pulses on a timer and produces a result every two pulse intervals
//! - [`SequenceWard`] - pulses at the beginning of each item of a fixed sequence

mod periodic;
mod sequence;
mod ward;
mod ward_fn;

pub use periodic::PeriodicWard;
pub use sequence::SequenceWard;
pub use ward::{Ward, WardRef, WardStreams};
pub use ward_fn::WardFn;
