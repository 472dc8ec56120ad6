//! Fixed-step pacing: turns wall-clock time into a bounded number of steps per tick

use std::time::Duration;

/// Default cap on steps per tick
pub const MAX_STEPS_PER_TICK: u32 = 8;

#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl FixedStep {
    /// `interval` is the simulated time per step; zero is raised to 1ms.
    pub fn new(interval: Duration, max_steps: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            max_steps: max_steps.max(1),
        }
    }

    /// Interval for a rate in steps per second. Non-positive rates mean one step per second.
    pub fn from_rate(steps_per_second: f32, max_steps: u32) -> Self {
        Self::new(rate_to_interval(steps_per_second), max_steps)
    }

    pub fn set_rate(&mut self, steps_per_second: f32) {
        self.interval = rate_to_interval(steps_per_second);
        self.accumulator = Duration::ZERO;
    }

    /// Adds `elapsed` and returns how many steps are due, at most the cap.
    ///
    /// Backlog beyond the cap is dropped so a long pause never turns into a
    /// burst of catch-up work.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.interval && steps < self.max_steps {
            self.accumulator -= self.interval;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.interval {
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    pub fn clear(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

fn rate_to_interval(steps_per_second: f32) -> Duration {
    if steps_per_second.is_finite() && steps_per_second > 0.0 {
        Duration::from_secs_f32(1.0 / steps_per_second).max(Duration::from_millis(1))
    } else {
        Duration::from_secs(1)
    }
}
