//! Animation clock
//!
//! Portable fixed-cadence step counter without async or platform timers.
//! The caller passes the current time on every tick.

use embassy_time::{Duration, Instant};

use crate::config::DEFAULT_TICK_INTERVAL;

/// Advances the shared animation step at a fixed cadence.
///
/// The step keeps advancing while the strip is off, so animations resume in
/// phase when it is turned back on.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    step: u8,
    last_advance: Instant,
    interval: Duration,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl AnimationClock {
    /// Create a clock with the step at zero and the baseline at time zero
    pub const fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::from_millis(0))
    }

    /// Create a clock with the given baseline
    pub const fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            step: 0,
            last_advance: now,
            interval,
        }
    }

    /// Advance the step if a full interval has elapsed since the last advance.
    ///
    /// Returns `true` if the step changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed_ms = now
            .as_millis()
            .saturating_sub(self.last_advance.as_millis());
        if elapsed_ms < self.interval.as_millis() {
            return false;
        }

        self.last_advance = now;
        self.step = self.step.wrapping_add(1);
        true
    }

    /// Current animation step
    pub const fn step(&self) -> u8 {
        self.step
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
