use std::time::{Duration, Instant};

/// Caps a render loop to a fixed frame rate.
pub struct FrameClock {
    last: Instant,            // Timestamp of the previous frame.
    frame_duration: Duration, // Target duration of each frame.
}

impl FrameClock {
    /// Creates a clock targeting the given frames-per-second.
    pub fn new(fps: f32) -> Self {
        Self {
            last: Instant::now(),
            frame_duration: Duration::from_secs_f32(1.0 / fps),
        }
    }

    /// Sleeps out the remainder of the current frame and returns the
    /// elapsed seconds since the previous call.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }

        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
