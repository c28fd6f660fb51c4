//! Frame-rate instrumentation.

use std::time::{Duration, Instant};

/// Counts per-frame invocations and logs the rate once per second.
pub struct FpsCounter {
    name: String,
    frames: u32,
    start: Instant,
}

impl FpsCounter {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            frames: 0,
            start: Instant::now(),
        }
    }

    /// Advances the frame counter by 1 and logs FPS if one second has passed since the last log
    /// line.
    pub fn tick(&mut self) {
        self.frames += 1;
        if self.start.elapsed() > Duration::from_secs(1) {
            log::debug!("{}: {} FPS", self.name, self.frames);
            self.frames = 0;
            self.start = Instant::now();
        }
    }
}
