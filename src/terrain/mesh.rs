//! Regular square grid mesh for the terrain plane.

use super::Vertex;
use crate::params::GridDimensions;

/// Terrain grid mesh, rebuilt from scratch whenever dimensions change
pub struct TerrainGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TerrainGrid {
    /// Build a flat XZ plane centered at the origin.
    ///
    /// `subdivisions` is the vertex count per edge, so the grid has
    /// `subdivisions^2` vertices and `(subdivisions - 1)^2 * 2` triangles.
    pub fn new(dimensions: &GridDimensions) -> Self {
        let n = dimensions.subdivisions.max(2) as usize;
        let step = dimensions.size / (n - 1) as f32;
        let half = dimensions.size / 2.0;

        let mut vertices = Vec::with_capacity(n * n);
        let mut indices = Vec::with_capacity((n - 1) * (n - 1) * 6);

        for z in 0..n {
            for x in 0..n {
                let x_pos = x as f32 * step - half;
                let z_pos = z as f32 * step - half;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    uv: [x as f32 / (n - 1) as f32, z as f32 / (n - 1) as f32],
                });
            }
        }

        // Triangle indices (counter-clockwise winding)
        for z in 0..n - 1 {
            for x in 0..n - 1 {
                let top_left = (z * n + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * n + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let dims = GridDimensions {
            size: 20.0,
            subdivisions: 50,
        };
        let grid = TerrainGrid::new(&dims);

        assert_eq!(grid.vertices.len(), 50 * 50);
        assert_eq!(grid.indices.len(), 49 * 49 * 6);
    }

    #[test]
    fn test_grid_extent_and_uv() {
        let dims = GridDimensions {
            size: 10.0,
            subdivisions: 3,
        };
        let grid = TerrainGrid::new(&dims);

        // Corners span [-size/2, size/2], uv spans [0, 1]
        let first = &grid.vertices[0];
        let last = grid.vertices.last().unwrap();
        assert_eq!(first.position, [-5.0, 0.0, -5.0]);
        assert_eq!(first.uv, [0.0, 0.0]);
        assert_eq!(last.position, [5.0, 0.0, 5.0]);
        assert_eq!(last.uv, [1.0, 1.0]);

        // Center vertex sits at the origin
        assert_eq!(grid.vertices[4].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_indices_in_bounds() {
        let dims = GridDimensions {
            size: 20.0,
            subdivisions: 7,
        };
        let grid = TerrainGrid::new(&dims);
        let max = grid.vertices.len() as u32;
        assert!(grid.indices.iter().all(|&i| i < max));
    }
}
