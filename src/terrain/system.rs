//! High-level terrain system: owns the grid, the generator, and the scroll
//! ticker, and runs the per-frame update.

use super::heightfield::{HeightField, ScrollTicker};
use super::mesh::TerrainGrid;
use crate::params::{GridDimensions, TerrainParams};

pub struct TerrainSystem {
    pub grid: TerrainGrid,
    height_field: HeightField,
    scroll: ScrollTicker,
}

impl TerrainSystem {
    pub fn new(params: &TerrainParams, seed: u32) -> Self {
        Self {
            grid: TerrainGrid::new(&params.dimensions),
            height_field: HeightField::new(seed),
            scroll: ScrollTicker::new(),
        }
    }

    /// Per-frame update: advance the scroll ticker, then rewrite every
    /// vertex height in place. Must run before the frame's buffer upload.
    pub fn update(&mut self, elapsed_s: f32, params: &TerrainParams) {
        self.scroll.advance(elapsed_s);
        self.height_field
            .apply(&mut self.grid.vertices, elapsed_s, params, self.scroll.offset());
    }

    /// Reconstruct the grid after a dimension change and reset the scroll
    /// offset. The caller is responsible for re-uploading GPU buffers.
    pub fn rebuild(&mut self, dimensions: &GridDimensions) {
        self.grid = TerrainGrid::new(dimensions);
        self.scroll.reset();
        log::info!(
            "rebuilt terrain grid: size {} x {} vertices",
            dimensions.size,
            dimensions.subdivisions
        );
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::HeightFunction;

    #[test]
    fn test_uniform_3x3_end_to_end() {
        let mut params = TerrainParams::new();
        params.set_plane_size(2.0);
        params.set_subdivisions(3);
        params.set_height_function(HeightFunction::Uniform);

        let mut terrain = TerrainSystem::new(&params, 42);

        // x, z in {-1, 0, 1}
        for vertex in &terrain.grid.vertices {
            assert!([-1.0, 0.0, 1.0].contains(&vertex.position[0]));
            assert!([-1.0, 0.0, 1.0].contains(&vertex.position[2]));
        }

        terrain.update(0.5, &params);

        assert_eq!(terrain.grid.vertices.len(), 9);
        for vertex in &terrain.grid.vertices {
            assert_eq!(vertex.position[1], 1.0);
        }
    }

    #[test]
    fn test_rebuild_resets_scroll_offset() {
        let mut params = TerrainParams::new();
        params.set_subdivisions(4);
        let mut terrain = TerrainSystem::new(&params, 42);

        // Accumulate a few scroll ticks
        for frame in 0..20 {
            terrain.update(frame as f32 * 0.4, &params);
        }
        assert!(terrain.scroll_offset() > 0);

        let needs_rebuild = params.set_subdivisions(8);
        assert!(needs_rebuild);
        terrain.rebuild(&params.dimensions);

        assert_eq!(terrain.scroll_offset(), 0);
        assert_eq!(terrain.grid.vertices.len(), 64);
    }

    #[test]
    fn test_update_is_deterministic_for_fixed_inputs() {
        let mut params = TerrainParams::new();
        params.set_subdivisions(6);
        params.set_height_function(HeightFunction::FractalNoise);

        let mut a = TerrainSystem::new(&params, 7);
        let mut b = TerrainSystem::new(&params, 7);
        a.update(1.0, &params);
        b.update(1.0, &params);

        for (va, vb) in a.grid.vertices.iter().zip(&b.grid.vertices) {
            assert_eq!(va.position, vb.position);
        }
    }
}
