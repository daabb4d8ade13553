//! # One-shot broadcast cancellation.
//!
//! [`CancelTrigger`] owns the right to fire; [`CancelSignal`] is the read side handed to
//! every task that must stop when the trigger fires. Both are thin wrappers over
//! [`CancellationToken`], split so that a task holding only a signal cannot cancel its
//! siblings.
//!
//! ## Rules
//! - Firing is **idempotent**: the second `fire()` is a no-op.
//! - Fired is **monotone**: once `is_fired()` returns `true` it never reverts.
//! - Any number of tasks may await [`CancelSignal::fired`] concurrently.

use std::time::Duration;

use tokio_util::sync::{
    CancellationToken, WaitForCancellationFuture, WaitForCancellationFutureOwned,
};

/// Writer side of a one-shot cancellation signal.
///
/// Dropping a trigger does **not** fire it; fire explicitly.
#[derive(Debug, Default)]
pub struct CancelTrigger {
    token: CancellationToken,
}

impl CancelTrigger {
    /// Creates an unfired trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal, waking every waiter.
    pub fn fire(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`fire`](Self::fire) has been called.
    pub fn is_fired(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns a read-only view of this trigger's signal.
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            token: self.token.clone(),
        }
    }
}

/// Read side of a one-shot cancellation signal.
///
/// Cheap to clone; every clone observes the same state.
///
/// # Example
/// ```
/// use steward::CancelTrigger;
///
/// let trigger = CancelTrigger::new();
/// let signal = trigger.signal();
/// assert!(!signal.is_fired());
///
/// trigger.fire();
/// trigger.fire(); // idempotent
/// assert!(signal.is_fired());
/// ```
#[derive(Clone, Debug)]
pub struct CancelSignal {
    token: CancellationToken,
}

impl CancelSignal {
    /// Returns a signal that can never fire.
    ///
    /// This is what [`or`](crate::cancel::or) returns for an empty input.
    pub fn never() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Returns a signal that has already fired.
    pub fn fired_now() -> Self {
        let token = CancellationToken::new();
        token.cancel();
        Self { token }
    }

    /// Returns a signal that fires once `delay` has elapsed.
    ///
    /// Spawns a sleeper task; must be called within a tokio runtime.
    pub fn after(delay: Duration) -> Self {
        let trigger = CancelTrigger::new();
        let signal = trigger.signal();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trigger.fire();
        });
        signal
    }

    /// Returns `true` once the signal has fired.
    pub fn is_fired(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes when the signal fires (immediately if it already has).
    pub fn fired(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }

    /// Owned variant of [`fired`](Self::fired), for futures that must be `'static`.
    pub fn fired_owned(self) -> WaitForCancellationFutureOwned {
        self.token.cancelled_owned()
    }
}

impl From<CancellationToken> for CancelSignal {
    /// Wraps an existing token (e.g. one owned by a runtime) as a read-only signal.
    fn from(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl From<&CancelTrigger> for CancelSignal {
    fn from(trigger: &CancelTrigger) -> Self {
        trigger.signal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn fire_is_idempotent_and_monotone() {
        let trigger = CancelTrigger::new();
        let a = trigger.signal();
        let b = a.clone();

        assert!(!trigger.is_fired());
        trigger.fire();
        trigger.fire();

        assert!(trigger.is_fired());
        assert!(a.is_fired());
        assert!(b.is_fired());
    }

    #[test]
    fn dropping_trigger_does_not_fire() {
        let trigger = CancelTrigger::new();
        let signal = trigger.signal();
        drop(trigger);
        assert!(!signal.is_fired());
    }

    #[test]
    fn constructors() {
        assert!(!CancelSignal::never().is_fired());
        assert!(CancelSignal::fired_now().is_fired());

        let token = CancellationToken::new();
        let signal = CancelSignal::from(token.clone());
        token.cancel();
        assert!(signal.is_fired());
    }

    #[tokio::test(start_paused = true)]
    async fn after_fires_on_time() {
        let start = Instant::now();
        let signal = CancelSignal::after(Duration::from_secs(3));
        assert!(!signal.is_fired());

        signal.fired().await;
        assert_eq!(start.elapsed().as_secs(), 3);
    }

    #[tokio::test]
    async fn many_waiters_are_woken() {
        let trigger = CancelTrigger::new();
        let mut waiters = Vec::new();
        for _ in 0..16 {
            let s = trigger.signal();
            waiters.push(tokio::spawn(async move { s.fired_owned().await }));
        }
        trigger.fire();
        for w in waiters {
            w.await.unwrap();
        }
    }
}
