//! The engine's only notion of time: a monotonic tick counter.

use crate::id::TickId;

/// Monotonic simulated clock.
///
/// Owned by the engine and advanced exactly once per scheduler pass.
/// No wraparound handling; ticks only increase for the lifetime of a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    now: TickId,
}

impl Clock {
    /// A clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick.
    pub fn tick(&mut self) {
        self.now = TickId(self.now.0 + 1);
    }

    /// The current tick.
    pub fn now(&self) -> TickId {
        self.now
    }
}
