//! Restart policies.
//!
//! A steward restarts its ward every time a monitoring window passes without a pulse.
//! By default it does so immediately and forever. These knobs bound that behavior:
//!
//! ## Contents
//! - [`RestartBudget`] how many restarts a steward may perform before giving up
//! - [`BackoffPolicy`] how long to wait before each restart (first / factor / max + jitter)
//! - [`JitterPolicy`]  randomization of that wait to avoid synchronized restarts
//!
//! ## Quick wiring
//! ```text
//! StewardConfig { budget: RestartBudget, backoff: Option<BackoffPolicy>, .. }
//!      └─► core::steward monitor loop uses:
//!           - budget.allows(restarts) before each restart
//!           - backoff.delay_for(restarts) to schedule it (None = immediate)
//! ```
//!
//! ## Defaults
//! - `RestartBudget::Unlimited`.
//! - No backoff (immediate restart).
//! - `BackoffPolicy::default()` → first=100ms, factor=2.0, max=30s, jitter=None.

mod backoff;
mod budget;
mod jitter;

pub use backoff::BackoffPolicy;
pub use budget::RestartBudget;
pub use jitter::JitterPolicy;
