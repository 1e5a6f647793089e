use glam::{Mat4, Vec3};

/// Free camera with position, yaw, pitch, and projection parameters.
///
/// The frame driver is the only per-frame writer; the wheel handler makes
/// one-shot depth adjustments. Renderers read it, nothing else touches it.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    /// Heading in radians. `-PI/2` looks down the -Z axis.
    pub yaw: f32,
    /// Elevation in radians, clamped to just short of straight up/down.
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

const PITCH_LIMIT: f32 = 89.0 * (std::f32::consts::PI / 180.0);

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(300.0, 75.0, 0.1, 1000.0)
    }
}

impl CameraRig {
    /// Camera at `(0, 0, distance)` looking toward the origin.
    pub fn new(distance: f32, fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            fov: fov_degrees.to_radians(),
            aspect: 16.0 / 9.0,
            near,
            far,
        }
    }

    /// Current look-direction unit vector.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Camera-local lateral unit vector rotated into world space.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Adjust elevation. Positive looks up.
    pub fn tilt(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Adjust heading. Positive turns right.
    pub fn pan(&mut self, delta: f32) {
        self.yaw += delta;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = CameraRig::default();
        let fwd = cam.forward();
        assert!(fwd.x.abs() < 1e-6);
        assert!(fwd.y.abs() < 1e-6);
        assert!((fwd.z + 1.0).abs() < 1e-6);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 300.0));
    }

    #[test]
    fn right_is_perpendicular_to_forward() {
        let mut cam = CameraRig::default();
        cam.pan(0.7);
        cam.tilt(0.3);
        assert!(cam.forward().dot(cam.right()).abs() < 1e-5);
        // Lateral vector stays horizontal regardless of pitch.
        assert!(cam.right().y.abs() < 1e-6);
    }

    #[test]
    fn tilt_clamps_at_the_poles() {
        let mut cam = CameraRig::default();
        for _ in 0..1000 {
            cam.tilt(0.02);
        }
        assert!(cam.pitch < std::f32::consts::FRAC_PI_2);
        assert!(cam.forward().is_finite());
    }

    #[test]
    fn pan_turns_right_for_positive_delta() {
        let mut cam = CameraRig::default();
        cam.pan(0.1);
        // Heading swings from -Z toward +X.
        assert!(cam.forward().x > 0.0);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = CameraRig::new(300.0, 75.0, 0.1, 1000.0);
        let vp = cam.view_projection();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
