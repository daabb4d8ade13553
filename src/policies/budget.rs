//! # Restart budget.

/// Upper bound on the number of restarts a steward performs.
///
/// Once the budget is spent, the next missed heartbeat stops the steward instead of
/// restarting the ward; its pulse and result streams then end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestartBudget {
    /// Restart as often as needed (default).
    #[default]
    Unlimited,
    /// Restart at most this many times over the steward's lifetime.
    AtMost(u32),
}

impl RestartBudget {
    /// Returns `true` if another restart is allowed after `performed` restarts.
    ///
    /// # Example
    /// ```
    /// use steward::RestartBudget;
    ///
    /// let budget = RestartBudget::AtMost(2);
    /// assert!(budget.allows(0));
    /// assert!(budget.allows(1));
    /// assert!(!budget.allows(2));
    /// assert!(RestartBudget::Unlimited.allows(u32::MAX));
    /// ```
    pub fn allows(&self, performed: u32) -> bool {
        match self {
            RestartBudget::Unlimited => true,
            RestartBudget::AtMost(max) => performed < *max,
        }
    }
}
