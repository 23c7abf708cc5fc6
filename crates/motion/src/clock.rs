/// Tracks the previous frame timestamp and reports elapsed seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    prev_timestamp_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `timestamp_ms` and return seconds since the last one.
    ///
    /// The clock starts at zero, so the first tick reports the full timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let delta = (timestamp_ms - self.prev_timestamp_ms) * 0.001;
        self.prev_timestamp_ms = timestamp_ms;
        delta as f32
    }

    pub fn prev_timestamp_ms(&self) -> f64 {
        self.prev_timestamp_ms
    }

    pub fn reset(&mut self) {
        self.prev_timestamp_ms = 0.0;
    }
}
