//! # Cancel-guarded result delivery.

use tokio::select;
use tokio::sync::mpsc;
use tokio::time::Interval;

use super::pulse::Heartbeat;
use crate::cancel::CancelSignal;
use crate::error::SendError;

/// Producer side of a ward's result channel.
///
/// Every send waits for room on the channel while watching the cancel signal; a result is
/// only ever given up because cancellation fired or the consumer went away, and in both
/// cases the value is handed back in the [`SendError`].
#[derive(Debug)]
pub struct ResultSender<T> {
    tx: mpsc::Sender<T>,
    cancel: CancelSignal,
}

impl<T> Clone for ResultSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<T> ResultSender<T> {
    pub(crate) fn new(tx: mpsc::Sender<T>, cancel: CancelSignal) -> Self {
        Self { tx, cancel }
    }

    /// Returns the cancel signal this sender races against.
    pub fn cancel(&self) -> &CancelSignal {
        &self.cancel
    }

    /// Returns `true` once the consumer has dropped its receiver.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Waits for room on the channel without racing the cancel signal.
    pub(crate) async fn reserve(&self) -> Result<mpsc::Permit<'_, T>, mpsc::error::SendError<()>> {
        self.tx.reserve().await
    }

    /// Delivers `value`, or gives it back if cancellation fires first.
    ///
    /// An already-fired signal wins over free buffer space.
    pub async fn send(&self, value: T) -> Result<(), SendError<T>> {
        if self.cancel.is_fired() {
            return Err(SendError::Canceled(value));
        }
        select! {
            biased;
            _ = self.cancel.fired() => Err(SendError::Canceled(value)),
            permit = self.tx.reserve() => match permit {
                Ok(permit) => {
                    permit.send(value);
                    Ok(())
                }
                Err(_) => Err(SendError::Closed(value)),
            },
        }
    }

    /// Delivers `value` while pulsing `heartbeat` on every tick of `pulses`.
    ///
    /// Use this when the consumer may be slow to take results: the ward keeps
    /// looking alive while it waits.
    pub async fn send_pulsing(
        &self,
        value: T,
        heartbeat: &Heartbeat,
        pulses: &mut Interval,
    ) -> Result<(), SendError<T>> {
        loop {
            if self.cancel.is_fired() {
                return Err(SendError::Canceled(value));
            }
            select! {
                _ = self.cancel.fired() => return Err(SendError::Canceled(value)),
                _ = pulses.tick() => {
                    heartbeat.pulse();
                }
                permit = self.tx.reserve() => {
                    return match permit {
                        Ok(permit) => {
                            permit.send(value);
                            Ok(())
                        }
                        Err(_) => Err(SendError::Closed(value)),
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelTrigger;
    use crate::heartbeat::{Pulse, ticker};
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test]
    async fn delivers_in_order() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = ResultSender::new(tx, CancelSignal::never());
        for v in 0..4 {
            sender.send(v).await.unwrap();
        }
        for v in 0..4 {
            assert_eq!(rx.recv().await, Some(v));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn blocked_send_is_abandoned_on_cancel() {
        let (tx, _rx) = mpsc::channel(1);
        let sender = ResultSender::new(tx, CancelSignal::after(Duration::from_secs(1)));
        sender.send("first").await.unwrap();

        let start = Instant::now();
        let err = sender.send("second").await.unwrap_err();
        assert!(err.is_canceled());
        assert_eq!(err.into_inner(), "second");
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn dropped_consumer_returns_value() {
        let (tx, rx) = mpsc::channel(1);
        let sender = ResultSender::new(tx, CancelSignal::never());
        drop(rx);
        assert!(sender.is_closed());
        let err = sender.send(5).await.unwrap_err();
        assert_eq!(err.as_label(), "send_closed");
    }

    #[tokio::test]
    async fn fired_signal_wins_over_free_space() {
        let trigger = CancelTrigger::new();
        let (tx, mut rx) = mpsc::channel(8);
        let sender = ResultSender::new(tx, trigger.signal());
        trigger.fire();
        assert!(sender.send(1).await.is_err());
        drop(sender);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn send_pulsing_keeps_pulsing_while_blocked() {
        let (tx, mut rx) = mpsc::channel(1);
        let (pulse_tx, mut pulse_rx) = mpsc::channel(1);
        let heartbeat = Heartbeat::new(pulse_tx);
        let sender = ResultSender::new(tx, CancelSignal::never());
        sender.send(0).await.unwrap();

        let consumer = tokio::spawn(async move {
            let mut seen = 0;
            for _ in 0..3 {
                assert_eq!(pulse_rx.recv().await, Some(Pulse));
                seen += 1;
            }
            let first = rx.recv().await;
            let second = rx.recv().await;
            (seen, first, second)
        });

        let mut pulses = ticker(Duration::from_millis(100));
        sender
            .send_pulsing(1, &heartbeat, &mut pulses)
            .await
            .unwrap();

        let (seen, first, second) = consumer.await.unwrap();
        assert_eq!(seen, 3);
        assert_eq!(first, Some(0));
        assert_eq!(second, Some(1));
    }
}
