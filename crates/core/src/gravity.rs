//! Gravity timer - turns elapsed wall time into discrete gravity steps
//!
//! The timer is driven by the caller's frame loop rather than by a background
//! thread, so disarming it is synchronous: once [`GravityTimer::disarm`]
//! returns, no step can become due until the timer is armed again.

use crate::types::GRAVITY_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    accumulated_ms: u32,
    armed: bool,
}

impl GravityTimer {
    /// A disarmed timer with the given period. A zero period is raised to 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            armed: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start counting from zero
    pub fn arm(&mut self) {
        self.armed = true;
        self.accumulated_ms = 0;
    }

    /// Stop and drop any partially elapsed period
    pub fn disarm(&mut self) {
        self.armed = false;
        self.accumulated_ms = 0;
    }

    /// Add elapsed time. Returns true when a full period has passed; call
    /// again with `0` to drain further due steps.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.armed {
            return false;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            return true;
        }
        false
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(GRAVITY_MS)
    }
}
