//! Error types used by the steward runtime and by wards.
//!
//! This module defines two error enums:
//!
//! - [`SendError`]: a result could not be handed to the consumer.
//! - [`ConfigError`]: a [`StewardConfig`](crate::StewardConfig) was rejected.
//!
//! Missed heartbeats are **not** represented here: they are absorbed by a
//! restart and only surface as [`EventKind::HeartbeatMissed`](crate::EventKind) events.

use std::fmt;

use thiserror::Error;

/// # Failure to deliver a result on a ward's result channel.
///
/// The undelivered value is handed back so the caller can decide what to do with it.
#[non_exhaustive]
#[derive(Error)]
pub enum SendError<T> {
    /// The cancel signal fired while the send was pending.
    #[error("send abandoned: cancellation fired")]
    Canceled(T),

    /// The consumer dropped its receiver.
    #[error("send failed: receiver dropped")]
    Closed(T),
}

impl<T> SendError<T> {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use steward::SendError;
    ///
    /// let err = SendError::Canceled(7);
    /// assert_eq!(err.as_label(), "send_canceled");
    /// assert_eq!(err.into_inner(), 7);
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SendError::Canceled(_) => "send_canceled",
            SendError::Closed(_) => "send_closed",
        }
    }

    /// Returns the value that could not be sent.
    pub fn into_inner(self) -> T {
        match self {
            SendError::Canceled(v) | SendError::Closed(v) => v,
        }
    }

    /// Indicates whether the send was abandoned because of cancellation.
    pub fn is_canceled(&self) -> bool {
        matches!(self, SendError::Canceled(_))
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Canceled(_) => f.write_str("Canceled(..)"),
            SendError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

/// # Invalid steward configuration.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The monitoring timeout must be non-zero (wards pulse every `timeout / 2`).
    #[error("monitoring timeout must be greater than zero")]
    ZeroTimeout,

    /// A channel capacity was zero.
    #[error("{what} capacity must be at least 1")]
    ZeroCapacity {
        /// Which channel was misconfigured.
        what: &'static str,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use steward::ConfigError;
    ///
    /// assert_eq!(ConfigError::ZeroTimeout.as_label(), "config_zero_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::ZeroTimeout => "config_zero_timeout",
            ConfigError::ZeroCapacity { .. } => "config_zero_capacity",
        }
    }
}
