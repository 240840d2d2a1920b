//! Frame rate measurement.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// Number of frame intervals averaged by [`FrameClock::fps`].
const FPS_WINDOW: usize = 10;

/// Measures the achieved frame rate from tick timestamps.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    intervals: VecDeque<Duration>,
}

impl FrameClock {
    /// Records that a frame started at `now`.
    pub fn mark(&mut self, now: Instant) {
        if let Some(last) = self.last.replace(now) {
            self.intervals.push_back(now.saturating_duration_since(last));
            while self.intervals.len() > FPS_WINDOW {
                self.intervals.pop_front();
            }
        }
    }

    /// Average frames per second over the recent window, 0 until measurable.
    pub fn fps(&self) -> f32 {
        let total: Duration = self.intervals.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.intervals.len() as f32 / total.as_secs_f32()
    }
}
