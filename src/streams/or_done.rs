//! # OrDone: stop reading a stream when cancellation fires.
//!
//! A consumer that has been cancelled cannot assume the stream it reads from has been
//! cancelled too. [`or_done`] moves the "select on cancel around every read" loop into one
//! place so consumers can simply iterate.
//!
//! ## Flow
//! ```text
//! loop {
//!   select {
//!     cancel fired   → exit
//!     source.next()  → None: exit
//!                    → Some(v): select {
//!                         out.send(v) → continue
//!                         cancel      → exit (v dropped)
//!                       }
//!   }
//! }
//! ```

use futures::{Stream, StreamExt};
use tokio::select;
use tokio::sync::mpsc;

use super::guarded::Guarded;
use crate::cancel::CancelSignal;

/// Mirrors `source` until it ends or `cancel` fires, whichever happens first.
///
/// Lossy on cancel: a value already pulled from `source` but not yet delivered is dropped.
///
/// # Example
/// ```
/// use futures::{StreamExt, stream};
/// use steward::{CancelSignal, streams::or_done};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let out: Vec<u32> = or_done(CancelSignal::never(), stream::iter(1..=3)).collect().await;
/// assert_eq!(out, vec![1, 2, 3]);
/// # }
/// ```
pub fn or_done<S>(cancel: CancelSignal, source: S) -> Guarded<S::Item>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(forward(cancel, source, tx));
    Guarded::new(rx)
}

/// Forwards `source` into `tx` with every await raced against `cancel`.
///
/// Both selects are biased toward `cancel`, so a fired signal wins over ready items.
/// Returns when the source ends, the receiver is dropped, or cancellation fires.
pub(crate) async fn forward<S>(cancel: CancelSignal, source: S, tx: mpsc::Sender<S::Item>)
where
    S: Stream,
{
    tokio::pin!(source);
    loop {
        let item = select! {
            biased;
            _ = cancel.fired() => return,
            item = source.next() => item,
        };
        let Some(item) = item else {
            return;
        };
        select! {
            biased;
            _ = cancel.fired() => return,
            sent = tx.send(item) => {
                if sent.is_err() {
                    return;
                }
            }
        }
    }
}
