//! # Bridge: read a stream of streams as one stream.
//!
//! Inner streams are drained one at a time, in arrival order, each through the same
//! cancel-guarded forwarding used by [`or_done`](super::or_done). Order within and across
//! inner streams is preserved.

use futures::{Stream, StreamExt};
use tokio::select;
use tokio::sync::mpsc;

use super::guarded::Guarded;
use super::or_done::forward;
use crate::cancel::CancelSignal;

/// Flattens `streams` into a single stream until it ends or `cancel` fires.
///
/// # Example
/// ```
/// use futures::{StreamExt, stream};
/// use steward::{CancelSignal, streams::bridge};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let chunks = stream::iter(vec![stream::iter(vec![1, 2]), stream::iter(vec![3])]);
/// let out: Vec<i32> = bridge(CancelSignal::never(), chunks).collect().await;
/// assert_eq!(out, vec![1, 2, 3]);
/// # }
/// ```
pub fn bridge<S, I>(cancel: CancelSignal, streams: S) -> Guarded<I::Item>
where
    S: Stream<Item = I> + Send + 'static,
    I: Stream + Send + 'static,
    I::Item: Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::pin!(streams);
        loop {
            let inner = select! {
                biased;
                _ = cancel.fired() => return,
                inner = streams.next() => inner,
            };
            let Some(inner) = inner else {
                return;
            };
            forward(cancel.clone(), inner, tx.clone()).await;
            if tx.is_closed() {
                return;
            }
        }
    });
    Guarded::new(rx)
}
