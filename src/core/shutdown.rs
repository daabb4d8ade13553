//! # OS-signal driven root cancellation.
//!
//! [`cancel_on_shutdown`] returns a [`CancelSignal`] that fires when the process receives a
//! termination signal. It is the natural `parent` for the outermost steward of a program.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes)
//! - `SIGQUIT` (quit signal)
//!
//! **Other platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]

use crate::cancel::{CancelSignal, CancelTrigger};
use crate::events::{Bus, Event, EventKind};

/// Returns a signal fired by the first termination signal.
///
/// Listeners are registered before this function returns, so a signal delivered right
/// after the call is not missed. When `bus` is given, `ShutdownRequested` is published
/// before the signal fires. Must be called within a tokio runtime.
pub fn cancel_on_shutdown(bus: Option<Bus>) -> std::io::Result<CancelSignal> {
    let listener = Listener::register()?;
    let trigger = CancelTrigger::new();
    let signal = trigger.signal();

    tokio::spawn(async move {
        listener.wait().await;
        if let Some(bus) = bus {
            bus.publish(Event::new(EventKind::ShutdownRequested));
        }
        trigger.fire();
    });
    Ok(signal)
}

#[cfg(unix)]
struct Listener {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
    sigquit: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Listener {
    fn register() -> std::io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
            sigquit: signal(SignalKind::quit())?,
        })
    }

    async fn wait(mut self) {
        tokio::select! {
            _ = self.sigint.recv()  => {},
            _ = self.sigterm.recv() => {},
            _ = self.sigquit.recv() => {},
        }
    }
}

#[cfg(not(unix))]
struct Listener;

#[cfg(not(unix))]
impl Listener {
    fn register() -> std::io::Result<Self> {
        Ok(Self)
    }

    async fn wait(self) {
        let _ = tokio::signal::ctrl_c().await;
    }
}
