/// Sink for the per-frame FPS readout.
///
/// The frame driver publishes at most one value per frame, and only when a
/// rate could actually be computed; sinks never see a non-finite number.
pub trait OverlaySink {
    fn publish_fps(&mut self, fps: u32);
}

/// Holds the formatted readout for an on-screen text overlay.
#[derive(Debug, Default)]
pub struct TextOverlay {
    text: String,
    last_fps: Option<u32>,
}

impl TextOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatted overlay line; empty until the first rate is published.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }
}

impl OverlaySink for TextOverlay {
    fn publish_fps(&mut self, fps: u32) {
        self.text.clear();
        use std::fmt::Write;
        let _ = write!(self.text, "FPS: {fps}");
        self.last_fps = Some(fps);
    }
}

/// Forwards FPS samples to the log; used by headless runs.
#[derive(Debug, Default)]
pub struct LogOverlay;

impl OverlaySink for LogOverlay {
    fn publish_fps(&mut self, fps: u32) {
        tracing::trace!(fps, "frame rate");
    }
}
