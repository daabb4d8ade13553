//! # Tee: split one stream into two.
//!
//! Each item is delivered to **both** outputs before the next item is pulled, so the two
//! consumers advance in lockstep (the slower one paces the source). If one output is
//! dropped, the other keeps receiving.

use futures::{Stream, StreamExt};
use tokio::select;
use tokio::sync::mpsc;

use super::guarded::Guarded;
use crate::cancel::CancelSignal;

/// Returns two streams that each observe every item of `source`.
///
/// Both end when `source` ends, when `cancel` fires, or when both are dropped.
pub fn tee<S>(cancel: CancelSignal, source: S) -> (Guarded<S::Item>, Guarded<S::Item>)
where
    S: Stream + Send + 'static,
    S::Item: Clone + Send + 'static,
{
    let (tx_a, rx_a) = mpsc::channel(1);
    let (tx_b, rx_b) = mpsc::channel(1);

    tokio::spawn(async move {
        tokio::pin!(source);
        loop {
            if tx_a.is_closed() && tx_b.is_closed() {
                return;
            }
            let item = select! {
                biased;
                _ = cancel.fired() => return,
                item = source.next() => item,
            };
            let Some(item) = item else {
                return;
            };
            // A closed side fails fast and is ignored; the open side still gets the item.
            select! {
                biased;
                _ = cancel.fired() => return,
                _ = async { tokio::join!(tx_a.send(item.clone()), tx_b.send(item)) } => {}
            }
        }
    });

    (Guarded::new(rx_a), Guarded::new(rx_b))
}
