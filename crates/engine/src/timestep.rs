//! Fixed-timestep accumulator.
//!
//! Wall-clock time is fed in as it passes; whole ticks come out. Leftover
//! milliseconds carry over to the next call so the average rate stays exact.

/// Upper bound on ticks returned by a single `advance` call.
///
/// After a long stall (suspended terminal, debugger) the game resumes at
/// normal speed instead of fast-forwarding through the backlog.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimestep {
    tick_ms: u32,
    accumulator_ms: u32,
}

impl FixedTimestep {
    pub fn new(tick_ms: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Feed elapsed time and return the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.tick_ms;

        if due > MAX_CATCH_UP_TICKS {
            self.accumulator_ms %= self.tick_ms;
            return MAX_CATCH_UP_TICKS;
        }

        self.accumulator_ms -= due * self.tick_ms;
        due
    }

    /// Milliseconds until the next tick becomes due.
    pub fn until_next_ms(&self) -> u32 {
        self.tick_ms - self.accumulator_ms
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}
