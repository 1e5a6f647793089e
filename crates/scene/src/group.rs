use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

/// One cube in the field: geometry size, material color, world position.
///
/// Immutable once created. Shadow flags are rendering-engine hints that
/// cross the renderer boundary untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDescriptor {
    /// Edge length, shared by every cube in a group.
    pub size: f32,
    /// RGB color, each channel in [0, 1).
    pub color: Vec3,
    /// World position, each axis in [-spread_half_width, +spread_half_width].
    pub position: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// The populated cube field plus the single orientation the frame driver
/// spins every frame.
///
/// The group owns all cubes exclusively; dropping the group drops the
/// field. Insertion order is creation order, though rendering does not
/// depend on it.
#[derive(Debug, Clone)]
pub struct SceneGroup {
    cubes: Vec<CubeDescriptor>,
    /// Group orientation as XYZ Euler angles in radians.
    pub orientation: Vec3,
}

impl SceneGroup {
    /// Scatter exactly `count` cubes with uniform-random colors and
    /// positions, all casting and receiving shadows.
    ///
    /// Draws from the process-wide RNG with no seeding; two runs never
    /// produce the same field. `count = 0` yields a valid empty group.
    pub fn populate(count: usize, cube_size: f32, spread_half_width: f32) -> Self {
        let mut rng = rand::thread_rng();
        let group = Self {
            cubes: scatter(&mut rng, count, cube_size, spread_half_width),
            orientation: Vec3::ZERO,
        };
        tracing::debug!(count, cube_size, spread_half_width, "scene group populated");
        group
    }

    pub fn cubes(&self) -> &[CubeDescriptor] {
        &self.cubes
    }

    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Increment the group orientation on the X and Y axes. Applied by the
    /// frame driver once per frame as the ambient spin.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.orientation.x += dx;
        self.orientation.y += dy;
    }

    /// Rotation applied uniformly to every cube at render time. Individual
    /// cube transforms never change.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        )
    }
}

fn scatter<R: Rng>(
    rng: &mut R,
    count: usize,
    cube_size: f32,
    spread_half_width: f32,
) -> Vec<CubeDescriptor> {
    let s = spread_half_width;
    (0..count)
        .map(|_| CubeDescriptor {
            size: cube_size,
            color: Vec3::new(
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            ),
            position: Vec3::new(
                rng.gen_range(-s..s),
                rng.gen_range(-s..s),
                rng.gen_range(-s..s),
            ),
            cast_shadow: true,
            receive_shadow: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_produces_exact_count() {
        let group = SceneGroup::populate(257, 5.0, 200.0);
        assert_eq!(group.cube_count(), 257);
    }

    #[test]
    fn populate_zero_is_empty_and_valid() {
        let group = SceneGroup::populate(0, 5.0, 200.0);
        assert!(group.is_empty());
        assert_eq!(group.orientation, Vec3::ZERO);
    }

    // Population is unseeded, so these are range assertions, not exact values.
    #[test]
    fn colors_and_positions_stay_in_range() {
        let spread = 50.0;
        let group = SceneGroup::populate(2000, 3.0, spread);
        for cube in group.cubes() {
            for channel in [cube.color.x, cube.color.y, cube.color.z] {
                assert!((0.0..1.0).contains(&channel), "color channel {channel}");
            }
            for axis in [cube.position.x, cube.position.y, cube.position.z] {
                assert!(axis >= -spread && axis <= spread, "position axis {axis}");
            }
            assert_eq!(cube.size, 3.0);
        }
    }

    #[test]
    fn every_cube_casts_and_receives_shadows() {
        let group = SceneGroup::populate(64, 5.0, 200.0);
        assert!(group.cubes().iter().all(|c| c.cast_shadow && c.receive_shadow));
    }

    #[test]
    fn rotate_accumulates_on_both_axes() {
        let mut group = SceneGroup::populate(1, 5.0, 200.0);
        group.rotate(0.005, 0.005);
        group.rotate(0.005, 0.005);
        assert!((group.orientation.x - 0.01).abs() < 1e-6);
        assert!((group.orientation.y - 0.01).abs() < 1e-6);
        assert_eq!(group.orientation.z, 0.0);
    }

    #[test]
    fn rotation_matrix_is_finite() {
        let mut group = SceneGroup::populate(0, 5.0, 200.0);
        group.rotate(1.3, -2.7);
        let m = group.rotation_matrix();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
