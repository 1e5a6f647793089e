use cubefield_scene::SceneGroup;

use crate::camera::CameraRig;

/// Renderer-agnostic interface. All backends implement this trait.
///
/// A renderer reads the scene group and camera and produces output. It
/// never mutates either; frame state is driver-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given group and camera.
    fn render(&mut self, group: &SceneGroup, camera: &CameraRig) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable frame summary: cube count, group orientation,
/// camera pose, and a short sample of cubes. Used by the CLI and by tests
/// that want to exercise the render boundary without a GPU.
#[derive(Debug)]
pub struct DebugTextRenderer {
    max_listed: usize,
}

impl Default for DebugTextRenderer {
    fn default() -> Self {
        Self { max_listed: 4 }
    }
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_listed(max_listed: usize) -> Self {
        Self { max_listed }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, group: &SceneGroup, camera: &CameraRig) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (cubes={}) ===\n",
            group.cube_count()
        ));
        out.push_str(&format!(
            "Group orientation: ({:.3}, {:.3}, {:.3})\n",
            group.orientation.x, group.orientation.y, group.orientation.z
        ));
        out.push_str(&format!(
            "Camera: pos=({:.1}, {:.1}, {:.1}) yaw={:.3} pitch={:.3}\n",
            camera.position.x, camera.position.y, camera.position.z, camera.yaw, camera.pitch
        ));

        for cube in group.cubes().iter().take(self.max_listed) {
            let p = cube.position;
            let c = cube.color;
            out.push_str(&format!(
                "  cube pos=({:.2}, {:.2}, {:.2}) rgb=({:.2}, {:.2}, {:.2}) shadows={}/{}\n",
                p.x, p.y, p.z, c.x, c.y, c.z, cube.cast_shadow, cube.receive_shadow
            ));
        }
        if group.cube_count() > self.max_listed {
            out.push_str(&format!(
                "  ... {} more\n",
                group.cube_count() - self.max_listed
            ));
        }

        out
    }
}

/// Renderer that only counts frames. Backs the windowless benchmark loop,
/// where the interesting output is the frame rate itself.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames_rendered: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Renderer for NullRenderer {
    type Output = ();

    fn render(&mut self, _group: &SceneGroup, _camera: &CameraRig) {
        self.frames_rendered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_empty_group() {
        let group = SceneGroup::populate(0, 5.0, 200.0);
        let camera = CameraRig::default();
        let output = DebugTextRenderer::new().render(&group, &camera);

        assert!(output.contains("cubes=0"));
        assert!(output.contains("pos=(0.0, 0.0, 300.0)"));
    }

    #[test]
    fn debug_renderer_caps_listing() {
        let group = SceneGroup::populate(10, 5.0, 200.0);
        let camera = CameraRig::default();
        let output = DebugTextRenderer::with_max_listed(3).render(&group, &camera);

        assert_eq!(output.matches("cube pos=").count(), 3);
        assert!(output.contains("... 7 more"));
        assert!(output.contains("shadows=true/true"));
    }

    #[test]
    fn null_renderer_counts_frames() {
        let group = SceneGroup::populate(1, 5.0, 200.0);
        let camera = CameraRig::default();
        let mut renderer = NullRenderer::new();
        for _ in 0..5 {
            renderer.render(&group, &camera);
        }
        assert_eq!(renderer.frames_rendered(), 5);
    }
}
