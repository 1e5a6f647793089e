/// Frame clock: the previous frame's timestamp (absent before the first
/// frame) and a monotonically increasing frame counter.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to `now_ms` and return the achieved frame rate,
    /// rounded to the nearest whole frame per second.
    ///
    /// Returns `None` on the first frame and on degenerate timing
    /// (identical or non-monotonic timestamps); callers skip the overlay
    /// update for that frame rather than publish a non-finite rate. The
    /// timestamp is recorded either way.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        self.frame_count += 1;
        let fps = self.last_timestamp_ms.and_then(|prev| {
            let dt = now_ms - prev;
            (dt > 0.0).then(|| (1000.0 / dt).round() as u32)
        });
        self.last_timestamp_ms = Some(now_ms);
        fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }
}
