//! Scene population: the cube-field workload.
//!
//! # Invariants
//! - The group is the sole owner of its cubes; cubes are immutable once created.
//! - Population is intentionally unseeded; re-running produces a different field.
//! - Only the group orientation mutates after population, one increment per frame.

pub mod group;

pub use group::{CubeDescriptor, SceneGroup};

pub fn crate_info() -> &'static str {
    "cubefield-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
