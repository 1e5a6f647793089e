use glam::Vec3;

/// Scene lighting: one ambient term plus one shadow-casting directional sun.
///
/// Backends consume this as data; the benchmark never varies it at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub ambient_intensity: f32,
    /// Direction *toward* the sun; normalized by the consumer.
    pub sun_direction: Vec3,
    pub sun_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            sun_direction: Vec3::new(1.0, 1.0, 1.0),
            sun_intensity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_is_lit() {
        let rig = LightRig::default();
        assert!(rig.ambient_intensity > 0.0);
        assert!(rig.sun_intensity > 0.0);
        assert!(rig.sun_direction.length() > 0.0);
    }
}
