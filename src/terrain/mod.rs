//! Deformable terrain plane: grid mesh, height synthesis, update glue.

use bytemuck::{Pod, Zeroable};

mod heightfield;
mod mesh;
mod system;

pub use heightfield::{HeightField, ScrollTicker};
pub use mesh::TerrainGrid;
pub use system::TerrainSystem;

/// Vertex data for the terrain mesh (position + UV coordinates).
///
/// Positions are rewritten every update tick; UVs are set once at grid
/// construction and never touched again.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}
