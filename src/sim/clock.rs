use std::time::{Duration, Instant};

/// Longest frame the simulation will integrate in one go, seconds.
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Measures the time between successive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_TIME`] so a
    /// stalled window does not fling the camera across the map.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        Self::cap(dt)
    }

    #[inline]
    fn cap(dt: Duration) -> f32 {
        dt.as_secs_f32().min(MAX_FRAME_TIME)
    }
}
