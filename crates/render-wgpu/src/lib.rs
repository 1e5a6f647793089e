//! wgpu render backend for the cubefield benchmark.
//!
//! Draws the whole cube field as a single instanced draw call. Instance
//! data (position, color) is uploaded once at startup (the field itself
//! is immutable) and each frame only rewrites one uniform buffer with
//! the view-projection and the group rotation.
//!
//! # Invariants
//! - The renderer never mutates the scene group or the camera.
//! - Per-frame GPU traffic is one uniform write, regardless of cube count.
//!
//! # Workaround
//! Cube shadow flags cross the render boundary as opaque hints but this
//! backend does not implement shadow mapping; lighting is the ambient +
//! directional rig evaluated per fragment. A shadow-mapping backend can
//! slot in behind the same interface without changing consumers.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
