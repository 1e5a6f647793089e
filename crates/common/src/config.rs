use serde::{Deserialize, Serialize};

/// Benchmark configuration, fixed at startup.
///
/// Defaults reproduce the reference workload: 50 000 cubes of edge 5
/// scattered over a 400-unit cube of space, viewed from 300 units out.
/// All fields are startup constants; nothing reads a config after the
/// frame loop begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of cubes to scatter through the scene.
    pub cube_count: usize,
    /// Edge length shared by every cube.
    pub cube_size: f32,
    /// Positions are drawn per-axis from [-spread_half_width, +spread_half_width].
    pub spread_half_width: f32,
    /// Scales the camera depth shift applied per wheel-delta unit.
    pub zoom_speed: f32,
    /// World units the camera travels per frame while a move flag is held.
    pub move_speed: f32,
    /// Radians of camera tilt/pan per frame while a look flag is held.
    pub rotation_speed: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Initial camera distance from the origin along +Z.
    pub camera_distance: f32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            cube_count: 50_000,
            cube_size: 5.0,
            spread_half_width: 200.0,
            zoom_speed: 0.1,
            move_speed: 2.0,
            rotation_speed: 0.02,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_distance: 300.0,
        }
    }
}

/// Errors from startup configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cube_count must be at least 1")]
    ZeroCubeCount,
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("fov_degrees must be in (0, 180), got {value}")]
    FovOutOfRange { value: f32 },
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    BadClipPlanes { near: f32, far: f32 },
    #[error("camera_distance must be finite, got {value}")]
    NonFiniteDistance { value: f32 },
}

impl BenchConfig {
    /// Validate before entering the frame loop. A bad config is fatal at
    /// startup, never a mid-run condition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cube_count == 0 {
            return Err(ConfigError::ZeroCubeCount);
        }
        let positive = [
            ("cube_size", self.cube_size),
            ("spread_half_width", self.spread_half_width),
            ("zoom_speed", self.zoom_speed),
            ("move_speed", self.move_speed),
            ("rotation_speed", self.rotation_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.fov_degrees.is_finite() && self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::FovOutOfRange {
                value: self.fov_degrees,
            });
        }
        if !(self.near.is_finite() && self.far.is_finite() && self.near > 0.0 && self.far > self.near)
        {
            return Err(ConfigError::BadClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        if !self.camera_distance.is_finite() {
            return Err(ConfigError::NonFiniteDistance {
                value: self.camera_distance,
            });
        }
        Ok(())
    }
}
