//! Cancel-aware stream plumbing.
//!
//! Every function here spawns one forwarding task that races each pull and each send
//! against a [`CancelSignal`](crate::CancelSignal), and hands back a [`Guarded`] stream
//! that ends when the forwarder exits.
//!
//! ## Contents
//! - [`or_done`] mirror a stream until it ends or cancellation fires
//! - [`bridge`]  flatten a stream of streams, one inner stream at a time
//! - [`tee`]     deliver every item to two consumers
//!
//! ## Rules
//! - **Lossy on cancel**: one item already pulled but not yet delivered may be dropped.
//! - **No deadlock**: a slow or absent consumer never pins the forwarder once cancelled.
//! - **Observable end**: the output always terminates with `None`.

mod bridge;
mod guarded;
mod or_done;
mod tee;

pub use bridge::bridge;
pub use guarded::Guarded;
pub use or_done::or_done;
pub use tee::tee;
