/// Frame timer: seconds elapsed between consecutive ticks.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last: Instant,
}

impl FrameTimer {
    /// Start timing from now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    /// Seconds since the previous tick (or since construction), then restart.
    pub fn tick(&mut self) -> f32 {
        self.tick_with(Instant::now())
    }

    /// Same as `tick()` with an explicit clock reading.
    ///
    /// A reading earlier than the previous one yields 0.
    pub fn tick_with(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last).as_secs_f32();
        if now > self.last {
            self.last = now;
        }
        elapsed
    }

    /// Restart from now without reporting the elapsed time.
    ///
    /// Used after long stalls (window drag, loading) so the next frame does
    /// not receive a huge delta.
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frame_timer_tests.rs"]
mod tests;
