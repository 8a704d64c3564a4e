//! Fixed-rate tick driver
//!
//! Converts variable host frame times into a whole number of fixed ticks.

use std::time::Duration;

use crate::consts::{MAX_TICKS_PER_FRAME, TICK_RATE_HZ};

/// Longest frame delta honoured; longer stalls are treated as this long
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Accumulates elapsed time and releases fixed ticks
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    accumulator: Duration,
    max_ticks_per_frame: u32,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

impl Ticker {
    /// Ticker for the given rate (ticks per second, at least 1)
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            accumulator: Duration::ZERO,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
        }
    }

    pub fn with_max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    /// Duration of one tick
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feed one frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME_DELTA);

        let mut ticks = 0;
        while self.accumulator >= self.period && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.period;
            ticks += 1;
        }

        // Drop backlog we refused to run instead of carrying it forward
        if ticks == self.max_ticks_per_frame && self.accumulator >= self.period {
            log::debug!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Forget accumulated time (e.g. after resuming from a hidden tab)
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
