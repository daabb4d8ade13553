//! Runtime core: stewards and their surroundings.
//!
//! - [`steward`]: the heartbeat-driven restart loop and its builder;
//! - [`config`]: per-steward settings;
//! - [`shutdown`]: OS-signal driven root cancellation.

mod config;
mod shutdown;
mod steward;

pub use config::StewardConfig;
pub use shutdown::cancel_on_shutdown;
pub use steward::{Steward, StewardBuilder};
