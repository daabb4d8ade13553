//! # Function-backed ward (`WardFn`)
//!
//! [`WardFn`] wraps a closure `F: Fn(CancelSignal, Duration) -> WardStreams<T>`, producing
//! a fresh ward instance per start. No state is shared between restarts unless the closure
//! captures it explicitly (e.g. an `Arc<AtomicU64>` restart counter).
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use steward::{CancelSignal, Ward, WardFn, WardRef, heartbeat};
//!
//! let w: WardRef<()> = WardFn::arc("idle", |cancel: CancelSignal, _every: Duration| {
//!     let (outlet, streams) = heartbeat::channel::<()>(cancel.clone(), 1);
//!     tokio::spawn(async move {
//!         cancel.fired().await;
//!         drop(outlet);
//!     });
//!     streams
//! });
//!
//! assert_eq!(w.name(), "idle");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use crate::cancel::CancelSignal;
use crate::wards::ward::{Ward, WardStreams};

/// Function-backed ward implementation.
pub struct WardFn<F, T> {
    name: Cow<'static, str>,
    f: F,
    _out: PhantomData<fn() -> T>,
}

impl<F, T> WardFn<F, T> {
    /// Creates a new function-backed ward.
    ///
    /// Prefer [`WardFn::arc`] when you immediately need a [`WardRef`](crate::WardRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _out: PhantomData,
        }
    }

    /// Creates the ward and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F, T> fmt::Debug for WardFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WardFn").field("name", &self.name).finish()
    }
}

impl<F, T> Ward<T> for WardFn<F, T>
where
    F: Fn(CancelSignal, Duration) -> WardStreams<T> + Send + Sync + 'static,
    T: 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self, cancel: CancelSignal, pulse_interval: Duration) -> WardStreams<T> {
        (self.f)(cancel, pulse_interval)
    }
}
