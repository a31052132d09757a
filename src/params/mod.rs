//! Parameter definitions with documented semantics.
//!
//! All tweakable values live here, owned by the application loop as explicit
//! mutable structs passed by reference into the systems each tick (no ambient
//! globals). Grid-affecting setters report whether the mesh must be rebuilt.

mod camera;
mod render;
mod terrain;

// Re-export all types
pub use camera::CameraParams;
pub use render::RenderConfig;
pub use terrain::{GridDimensions, HeightFunction, NoiseParams, TerrainParams};
