//! Fixed-interval tick accounting.
//!
//! The session does not own a timer. Whatever drives it (a UI event loop,
//! a test) reports elapsed time and the clock says how many AI ticks are
//! due, carrying the remainder forward.

use std::time::Duration;

/// Converts elapsed time into whole ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickClock {
    interval: Duration,
    carry: Duration,
}

impl TickClock {
    /// Create a clock ticking every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "tick interval must be non-zero");
        Self {
            interval,
            carry: Duration::ZERO,
        }
    }

    /// Time between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated toward the next tick.
    #[must_use]
    pub fn pending(&self) -> Duration {
        self.carry
    }

    /// Add elapsed time and return how many ticks are now due.
    ///
    /// Saturates instead of overflowing on absurd inputs.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let total = self.carry.saturating_add(elapsed).as_nanos();
        let interval = self.interval.as_nanos();

        // Remainder is below `interval`, which came from a Duration.
        self.carry = Duration::from_nanos((total % interval) as u64);
        u32::try_from(total / interval).unwrap_or(u32::MAX)
    }
}
