use std::time::Duration;

use crate::foundation::core::Millis;

/// Trailing-edge debouncer driven by caller-supplied timestamps.
///
/// Every `trigger` pushes the deadline to `now + quiet`; `poll` fires once the deadline has
/// passed and disarms until the next trigger.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: u64,
    deadline: Option<Millis>,
    triggers: u64,
    fired: u64,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet_ms: u64::try_from(quiet.as_millis()).unwrap_or(u64::MAX),
            deadline: None,
            triggers: 0,
            fired: 0,
        }
    }

    pub fn from_millis(quiet_ms: u64) -> Self {
        Self::new(Duration::from_millis(quiet_ms))
    }

    pub fn trigger(&mut self, now: Millis) {
        self.triggers = self.triggers.saturating_add(1);
        self.deadline = Some(now.saturating_add(self.quiet_ms));
    }

    /// Returns `true` exactly once per burst, at the first poll at or after the deadline.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                self.fired = self.fired.saturating_add(1);
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    pub fn triggers(&self) -> u64 {
        self.triggers
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/debounce.rs"]
mod tests;
