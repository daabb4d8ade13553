//! # Or-combinator for cancellation signals.
//!
//! [`or`] merges any number of [`CancelSignal`]s into one that fires as soon as any input
//! fires. The result is an ordinary signal and can be passed to further `or` calls, which
//! is how stewards nest cancellation scopes.
//!
//! ## Arity
//! ```text
//! or([])        → CancelSignal::never()        (no task)
//! or([a])       → a                            (no task)
//! or([a, b, …]) → derived, fired by one fan-in task
//! ```
//!
//! ## Fan-in
//! One task per derived signal waits on every input through a [`FuturesUnordered`]
//! wait-set, so only woken inputs are polled and hundreds of inputs cost one task.
//! The task exits as soon as the first input fires.
//!
//! ## Rules
//! - No ordering guarantee among inputs firing near-simultaneously.
//! - If an input has already fired, the derived signal is returned already fired.
//! - With two or more inputs, must be called within a tokio runtime.

use futures::StreamExt;
use futures::stream::FuturesUnordered;

use super::signal::{CancelSignal, CancelTrigger};

/// Returns a signal that fires when any of `signals` fires.
///
/// # Example
/// ```
/// use steward::{CancelTrigger, cancel};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let parent = CancelTrigger::new();
/// let local = CancelTrigger::new();
/// let either = cancel::or([parent.signal(), local.signal()]);
///
/// local.fire();
/// either.fired().await;
/// assert!(!parent.is_fired());
/// # }
/// ```
pub fn or<I>(signals: I) -> CancelSignal
where
    I: IntoIterator<Item = CancelSignal>,
{
    let mut signals: Vec<CancelSignal> = signals.into_iter().collect();
    match signals.len() {
        0 => return CancelSignal::never(),
        1 => return signals.remove(0),
        _ => {}
    }
    if signals.iter().any(CancelSignal::is_fired) {
        return CancelSignal::fired_now();
    }

    let trigger = CancelTrigger::new();
    let derived = trigger.signal();
    let mut waiting: FuturesUnordered<_> = signals
        .into_iter()
        .map(CancelSignal::fired_owned)
        .collect();

    tokio::spawn(async move {
        waiting.next().await;
        trigger.fire();
    });
    derived
}
