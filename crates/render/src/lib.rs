//! Rendering boundary: renderer-agnostic interface for the benchmark.
//!
//! # Invariants
//! - Renderers never mutate the scene group or the camera.
//! - The overlay sink receives only finite FPS values.
//!
//! The GPU backend lives in `cubefield-render-wgpu`; the trait here is
//! stable, and the debug/null renderers keep the whole frame pipeline
//! drivable without a window or a GPU.

pub mod camera;
pub mod lights;
pub mod overlay;
pub mod renderer;

pub use camera::CameraRig;
pub use lights::LightRig;
pub use overlay::{LogOverlay, OverlaySink, TextOverlay};
pub use renderer::{DebugTextRenderer, NullRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "cubefield-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
