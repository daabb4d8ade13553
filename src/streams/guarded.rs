//! Receiver-backed output stream shared by the stream patterns.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

/// Output side of a cancel-guarded forwarder.
///
/// Yields items in the order the forwarder delivered them and ends with `None` once the
/// forwarder has exited (source exhausted or cancellation fired).
#[derive(Debug)]
pub struct Guarded<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> Guarded<T> {
    pub(crate) fn new(rx: mpsc::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Receives the next item, `None` at end of stream.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Returns the underlying receiver.
    pub fn into_inner(self) -> mpsc::Receiver<T> {
        self.rx
    }
}

impl<T> Stream for Guarded<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}
