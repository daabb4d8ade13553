//! # Steward configuration.
//!
//! Provides [`StewardConfig`], the settings a [`Steward`](crate::Steward) runs with.
//! Usually filled through [`StewardBuilder`](crate::StewardBuilder); the struct is public
//! so one configuration can be shared by several stewards.
//!
//! ## Sentinel values
//! - `backoff = None` → restart immediately after a missed heartbeat
//! - `budget = RestartBudget::Unlimited` → never give up on the ward
//! - `timeout = 0s` / capacities `= 0` → rejected by [`StewardConfig::validate`]

use std::time::Duration;

use crate::error::ConfigError;
use crate::heartbeat::{MIN_PULSE_INTERVAL, PULSE_CAPACITY};
use crate::policies::{BackoffPolicy, RestartBudget};

/// Settings for one steward.
///
/// ## Field semantics
/// - `timeout`: silence window after which the ward is considered hung
/// - `pulse_capacity`: buffer of the steward's own pulse stream
/// - `result_capacity`: buffer of the steward's own result stream
/// - `backoff`: optional wait between a missed heartbeat and the restart
/// - `budget`: optional cap on the number of restarts
#[derive(Clone, Debug, PartialEq)]
pub struct StewardConfig {
    /// Maximum silence tolerated from the ward.
    ///
    /// The ward is started with a pulse interval of `timeout / 2`, so it has at least two
    /// chances to pulse per window. Must be non-zero.
    pub timeout: Duration,

    /// Capacity of the steward's pulse channel (min 1).
    pub pulse_capacity: usize,

    /// Capacity of the steward's result channel (min 1).
    pub result_capacity: usize,

    /// Delay schedule applied before each restart.
    ///
    /// - `None` = restart as soon as the heartbeat is missed
    /// - `Some(p)` = wait `p.delay_for(n)` before restart number `n` (0-indexed)
    pub backoff: Option<BackoffPolicy>,

    /// Cap on restarts over the steward's lifetime.
    pub budget: RestartBudget,
}

impl StewardConfig {
    /// Checks the configuration for values a steward cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.pulse_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { what: "pulse" });
        }
        if self.result_capacity == 0 {
            return Err(ConfigError::ZeroCapacity { what: "result" });
        }
        Ok(())
    }

    /// Pulse interval handed to the supervised ward (`timeout / 2`, at least 1ms).
    #[inline]
    pub fn ward_pulse_interval(&self) -> Duration {
        (self.timeout / 2).max(MIN_PULSE_INTERVAL)
    }

    /// Returns the wait before restart number `restart` (0-indexed), if any.
    #[inline]
    pub fn restart_delay(&self, restart: u32) -> Option<Duration> {
        self.backoff
            .map(|p| p.delay_for(restart))
            .filter(|d| !d.is_zero())
    }
}

impl Default for StewardConfig {
    /// Default configuration:
    ///
    /// - `timeout = 2s`
    /// - `pulse_capacity = 1`, `result_capacity = 1`
    /// - `backoff = None` (restart immediately)
    /// - `budget = Unlimited`
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            pulse_capacity: PULSE_CAPACITY,
            result_capacity: 1,
            backoff: None,
            budget: RestartBudget::Unlimited,
        }
    }
}
