//! Fixed-rate logic clock.
//!
//! Ticks are derived from total wall time since start rather than from
//! per-frame deltas, so rounding never accumulates into drift.

use std::time::Duration;

/// Most ticks a single frame may run before the backlog is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct LogicClock {
    rate_hz: u32,
    /// Ticks handed out so far, including any dropped backlog.
    issued: u64,
}

impl LogicClock {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            rate_hz: rate_hz.max(1),
            issued: 0,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos((NANOS_PER_SECOND / self.rate_hz as u128) as u64)
    }

    fn ticks_at(&self, elapsed: Duration) -> u64 {
        (elapsed.as_nanos() * self.rate_hz as u128 / NANOS_PER_SECOND) as u64
    }

    /// How many logic ticks to run now, given the total time since start.
    /// After a stall longer than the catch-up limit the remaining backlog
    /// is skipped instead of replayed.
    pub fn ticks_due(&mut self, elapsed: Duration) -> u32 {
        let target = self.ticks_at(elapsed);
        let due = target.saturating_sub(self.issued);
        if due > MAX_CATCH_UP_TICKS as u64 {
            log::debug!(
                "logic clock behind by {} ticks, dropping {}",
                due,
                due - MAX_CATCH_UP_TICKS as u64
            );
            self.issued = target;
            return MAX_CATCH_UP_TICKS;
        }
        self.issued = target.max(self.issued);
        due as u32
    }

    /// Time left until the next tick becomes due.
    pub fn until_next_tick(&self, elapsed: Duration) -> Duration {
        let next = Duration::from_nanos(
            ((self.issued + 1) as u128 * NANOS_PER_SECOND / self.rate_hz as u128) as u64,
        );
        next.saturating_sub(elapsed)
    }
}
