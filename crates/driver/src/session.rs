use cubefield_common::{BenchConfig, ConfigError};
use cubefield_input::{ActionSet, InputTracker, Key, NavAction};
use cubefield_render::{CameraRig, OverlaySink, Renderer};
use cubefield_scene::SceneGroup;

use crate::clock::FrameClock;

/// Per-frame group rotation, applied on the X and Y axes every frame
/// regardless of input. Keeps the field visually active with no one at
/// the keyboard.
pub const AMBIENT_SPIN: f32 = 0.005;

/// Wheel deltas are scaled by this before the configured zoom speed,
/// matching browser-style wheel units (one notch is roughly 100 delta).
const WHEEL_STEP: f32 = 0.1;

const TRANSLATE: ActionSet = ActionSet::EMPTY
    .with(NavAction::Forward)
    .with(NavAction::Backward)
    .with(NavAction::StrafeLeft)
    .with(NavAction::StrafeRight);

/// One benchmark run: the populated scene group, the camera, the input
/// tracker and the frame clock, owned together so independent sessions
/// can coexist and tests need no global fixtures.
///
/// Event handlers (`on_key_down`, `on_key_up`, `on_wheel`) and the frame
/// hook (`on_frame`) are the only mutation paths.
pub struct BenchSession {
    config: BenchConfig,
    group: SceneGroup,
    camera: CameraRig,
    input: InputTracker,
    clock: FrameClock,
}

impl BenchSession {
    /// Validate the config, populate the scene and place the camera.
    /// A bad config fails here, before any frame runs.
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let group = SceneGroup::populate(
            config.cube_count,
            config.cube_size,
            config.spread_half_width,
        );
        let camera = CameraRig::new(
            config.camera_distance,
            config.fov_degrees,
            config.near,
            config.far,
        );
        tracing::info!(cubes = group.cube_count(), "benchmark session ready");
        Ok(Self {
            config,
            group,
            camera,
            input: InputTracker::new(),
            clock: FrameClock::new(),
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn group(&self) -> &SceneGroup {
        &self.group
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Hosts adjust projection parameters (aspect ratio) on resize.
    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    pub fn on_key_down(&mut self, key: Key) {
        self.input.on_key_down(key);
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.input.on_key_up(key);
    }

    /// Apply a wheel event as an immediate one-shot depth shift,
    /// independent of any held navigation key. Positive deltas (scroll
    /// down) pull the camera back toward +Z.
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.input.on_wheel(delta_y);
        let delta = self.input.take_wheel_delta();
        self.camera.position.z -= delta * WHEEL_STEP * self.config.zoom_speed;
    }

    /// Run one frame: sample the clock, steer the camera from the current
    /// navigation flags, advance the ambient spin, and issue exactly one
    /// render call.
    ///
    /// The first frame ever, and frames with degenerate timing, publish
    /// no rate; all other per-frame work still happens.
    pub fn on_frame<R, O>(&mut self, now_ms: f64, renderer: &mut R, overlay: &mut O) -> R::Output
    where
        R: Renderer,
        O: OverlaySink,
    {
        if let Some(fps) = self.clock.tick(now_ms) {
            overlay.publish_fps(fps);
        }

        self.steer();
        self.group.rotate(AMBIENT_SPIN, AMBIENT_SPIN);

        renderer.render(&self.group, &self.camera)
    }

    /// Apply the active navigation flags to the camera transform.
    ///
    /// Look flags first, then translation from the post-look orientation,
    /// as in the reference frame order. The translation magnitude is
    /// computed once per frame and shared by every active flag, so
    /// simultaneous opposite flags cancel to exactly zero net movement.
    fn steer(&mut self) {
        let flags = self.input.flags();
        let look = self.config.rotation_speed;
        if flags.contains(NavAction::TiltUp) {
            self.camera.tilt(look);
        }
        if flags.contains(NavAction::TiltDown) {
            self.camera.tilt(-look);
        }
        if flags.contains(NavAction::PanLeft) {
            self.camera.pan(-look);
        }
        if flags.contains(NavAction::PanRight) {
            self.camera.pan(look);
        }

        let move_factor = if flags.intersects(TRANSLATE) {
            self.config.move_speed
        } else {
            0.0
        };
        if move_factor != 0.0 {
            let forward = self.camera.forward();
            let right = self.camera.right();
            if flags.contains(NavAction::Forward) {
                self.camera.position += forward * move_factor;
            }
            if flags.contains(NavAction::Backward) {
                self.camera.position -= forward * move_factor;
            }
            if flags.contains(NavAction::StrafeLeft) {
                self.camera.position -= right * move_factor;
            }
            if flags.contains(NavAction::StrafeRight) {
                self.camera.position += right * move_factor;
            }
        }
    }
}
