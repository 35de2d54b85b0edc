//! Buzzer arbitration.
//!
//! The buzzer is the one piece of shared mutable state in the system: a
//! single lock flag. The first press while unlocked wins; every later
//! press is silently rejected until a reset.

/// Outcome of a press attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The press took the lock. The caller must broadcast the press
    /// followed by a timer stop.
    Won,
    /// The buzzer was already locked. Not an error: the caller emits
    /// nothing, and the absence of a broadcast is the rejection.
    Rejected,
}

/// First-come-wins lock over the shared buzzer.
///
/// `locked` is private and only changes through [`press`](Self::press)
/// and [`reset`](Self::reset). Callers hold the relay state mutex
/// across the whole call, so the check-and-set in `press` cannot
/// interleave with another press.
#[derive(Debug, Default)]
pub struct BuzzerArbiter {
    locked: bool,
}

impl BuzzerArbiter {
    /// Create an arbiter in the unlocked state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to take the buzzer.
    ///
    /// Exactly one of any set of competing presses observes `locked ==
    /// false` here; the rest return [`PressOutcome::Rejected`] with no
    /// state change.
    pub fn press(&mut self) -> PressOutcome {
        if self.locked {
            return PressOutcome::Rejected;
        }
        self.locked = true;
        PressOutcome::Won
    }

    /// Release the buzzer. Idempotent: resetting an unlocked buzzer is
    /// a no-op state-wise, but callers still broadcast the reset so
    /// late joiners can resynchronize.
    pub fn reset(&mut self) {
        self.locked = false;
    }

    /// Whether the buzzer is currently held.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unlocked() {
        assert!(!BuzzerArbiter::new().is_locked());
    }

    #[test]
    fn test_first_press_wins_rest_rejected() {
        let mut arbiter = BuzzerArbiter::new();

        let outcomes: Vec<_> = (0..5).map(|_| arbiter.press()).collect();

        let wins = outcomes
            .iter()
            .filter(|o| **o == PressOutcome::Won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(outcomes[0], PressOutcome::Won);
        assert!(arbiter.is_locked());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut arbiter = BuzzerArbiter::new();
        arbiter.reset();
        assert!(!arbiter.is_locked());

        assert_eq!(arbiter.press(), PressOutcome::Won);
        arbiter.reset();
        arbiter.reset();
        assert!(!arbiter.is_locked());
    }

    #[test]
    fn test_press_reset_press() {
        let mut arbiter = BuzzerArbiter::new();
        assert_eq!(arbiter.press(), PressOutcome::Won);
        arbiter.reset();
        assert_eq!(arbiter.press(), PressOutcome::Won);
        assert!(arbiter.is_locked());
    }

    #[test]
    fn test_rejected_press_leaves_state_alone() {
        let mut arbiter = BuzzerArbiter::new();
        assert_eq!(arbiter.press(), PressOutcome::Won);
        assert_eq!(arbiter.press(), PressOutcome::Rejected);
        assert!(arbiter.is_locked());
    }
}
