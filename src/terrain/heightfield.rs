//! Per-vertex terrain height synthesis.
//!
//! Once per update tick, every vertex of the grid gets a new y computed from
//! its (x, z), the elapsed time, and the active [`HeightFunction`]. The two
//! coherent-noise variants additionally scroll their sample domain along z by
//! a fixed-rate tick counter, producing the scrolling-terrain effect.

use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Vertex;
use crate::params::{HeightFunction, NoiseParams, TerrainParams};

/// Fixed-rate counter driving the noise scroll, decoupled from frame rate.
///
/// The reference time advances by 0.1 while the gate requires a 0.3 gap, so
/// after a long frame the counter keeps firing on consecutive frames until it
/// has caught up. Terrain scroll speed depends on this exact behavior.
pub struct ScrollTicker {
    offset: u32,
    last_tick: f32,
}

impl ScrollTicker {
    pub fn new() -> Self {
        Self {
            offset: 0,
            last_tick: 0.0,
        }
    }

    /// Advance the counter once per frame, before height evaluation.
    pub fn advance(&mut self, elapsed_s: f32) {
        if elapsed_s >= self.last_tick + 0.3 {
            self.last_tick += 0.1;
            self.offset += 1;
        }
    }

    /// Current scroll offset, added to the z sample coordinate.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Reset the offset after a grid rebuild. The reference time is kept.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for ScrollTicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Height generator writing y in place over a grid's vertices
pub struct HeightField {
    perlin: Perlin,
    rng: StdRng,
}

impl HeightField {
    /// Create a new generator. The seed fixes the coherent-noise lattice.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// Overwrite the y of every vertex according to the active height
    /// function. UVs and the x/z of positions are left untouched.
    pub fn apply(
        &mut self,
        vertices: &mut [Vertex],
        elapsed_s: f32,
        params: &TerrainParams,
        scroll_offset: u32,
    ) {
        let t = elapsed_s * 4.0;
        let scroll = scroll_offset as f32;

        for vertex in vertices.iter_mut() {
            let [x, _, z] = vertex.position;
            vertex.position[1] = match params.height_function {
                HeightFunction::Sine => {
                    params.height_mult
                        * ((x * 1.1467 + t).sin() * 0.323 + (z * 0.7325 + t).cos() * 0.431)
                }
                // Constant 1, the multiplier does not apply
                HeightFunction::Uniform => 1.0,
                HeightFunction::RandomNoise => self.rng.gen_range(0.0..1.0),
                HeightFunction::FractalNoise => {
                    params.height_mult
                        * self.fractal(params.noise.octaves, x, z + scroll, &params.noise)
                }
                HeightFunction::SingleOctaveNoise => {
                    params.height_mult * self.sample(x, z + scroll, &params.noise)
                }
            };
        }
    }

    /// One octave of coherent noise at the configured frequency/amplitude.
    fn sample(&self, x: f32, z: f32, noise: &NoiseParams) -> f32 {
        noise.amplitude
            * self
                .perlin
                .get([(x * noise.frequency) as f64, (z * noise.frequency) as f64]) as f32
    }

    /// Successive octaves of coherent noise, each with higher frequency and
    /// lower amplitude than the previous one.
    fn fractal(&self, octaves: u32, x: f32, z: f32, noise: &NoiseParams) -> f32 {
        let mut value = 0.0;
        let mut frequency = noise.frequency;
        let mut amplitude = noise.amplitude;

        for _ in 0..octaves {
            value += amplitude
                * self
                    .perlin
                    .get([(x * frequency) as f64, (z * frequency) as f64]) as f32;
            frequency *= noise.lacunarity;
            amplitude *= noise.persistence;
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GridDimensions;
    use crate::terrain::TerrainGrid;

    fn single_vertex(x: f32, z: f32) -> Vec<Vertex> {
        vec![Vertex {
            position: [x, 0.0, z],
            uv: [0.0, 0.0],
        }]
    }

    fn params_with(function: HeightFunction) -> TerrainParams {
        let mut params = TerrainParams::new();
        params.set_height_function(function);
        params
    }

    #[test]
    fn test_sine_at_origin_t0() {
        let mut field = HeightField::new(42);
        let mut vertices = single_vertex(0.0, 0.0);
        let params = params_with(HeightFunction::Sine);

        field.apply(&mut vertices, 0.0, &params, 0);

        // sin(0) * 0.323 + cos(0) * 0.431 = 0.431
        assert!((vertices[0].position[1] - 0.431).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_ignores_height_mult() {
        let mut field = HeightField::new(42);
        let mut vertices = single_vertex(3.0, -7.0);
        let mut params = params_with(HeightFunction::Uniform);
        params.set_height_mult(5.0);

        field.apply(&mut vertices, 12.3, &params, 9);

        assert_eq!(vertices[0].position[1], 1.0);
    }

    #[test]
    fn test_random_noise_range_and_variety() {
        let mut field = HeightField::new(42);
        let mut vertices = single_vertex(1.0, 1.0);
        let params = params_with(HeightFunction::RandomNoise);

        let mut samples = Vec::with_capacity(1000);
        for tick in 0..1000 {
            field.apply(&mut vertices, tick as f32 * 0.016, &params, 0);
            samples.push(vertices[0].position[1]);
        }

        assert!(samples.iter().all(|&y| (0.0..1.0).contains(&y)));
        assert!(samples.iter().any(|&y| y != samples[0]));
    }

    #[test]
    fn test_degenerate_fractal_equals_single_octave() {
        let mut field = HeightField::new(42);
        let mut fractal_vertices = single_vertex(2.5, -1.25);
        let mut single_vertices = fractal_vertices.clone();

        let mut params = params_with(HeightFunction::FractalNoise);
        params.set_octaves(1);
        params.set_frequency(0.7);
        params.set_amplitude(3.0);
        field.apply(&mut fractal_vertices, 1.0, &params, 2);

        params.set_height_function(HeightFunction::SingleOctaveNoise);
        field.apply(&mut single_vertices, 1.0, &params, 2);

        assert_eq!(
            fractal_vertices[0].position[1],
            single_vertices[0].position[1]
        );
    }

    #[test]
    fn test_fractal_octaves_change_result() {
        let mut field = HeightField::new(42);
        let mut params = params_with(HeightFunction::FractalNoise);
        let mut one = single_vertex(2.3, 3.7);
        let mut four = one.clone();

        params.set_octaves(1);
        field.apply(&mut one, 0.0, &params, 0);
        params.set_octaves(4);
        field.apply(&mut four, 0.0, &params, 0);

        assert_ne!(one[0].position[1], four[0].position[1]);
    }

    #[test]
    fn test_deterministic_variants_are_idempotent() {
        for function in [
            HeightFunction::Sine,
            HeightFunction::Uniform,
            HeightFunction::FractalNoise,
            HeightFunction::SingleOctaveNoise,
        ] {
            let mut field = HeightField::new(42);
            let params = params_with(function);
            let dims = GridDimensions {
                size: 8.0,
                subdivisions: 5,
            };
            let mut first = TerrainGrid::new(&dims);
            let mut second = TerrainGrid::new(&dims);

            field.apply(&mut first.vertices, 2.0, &params, 3);
            field.apply(&mut second.vertices, 2.0, &params, 3);

            for (a, b) in first.vertices.iter().zip(&second.vertices) {
                assert_eq!(a.position, b.position, "variant {:?}", function);
            }
        }
    }

    #[test]
    fn test_apply_leaves_uv_and_xz_untouched() {
        let mut field = HeightField::new(42);
        let params = params_with(HeightFunction::FractalNoise);
        let dims = GridDimensions {
            size: 6.0,
            subdivisions: 4,
        };
        let mut grid = TerrainGrid::new(&dims);
        let before = grid.vertices.clone();

        field.apply(&mut grid.vertices, 5.0, &params, 7);

        for (a, b) in grid.vertices.iter().zip(&before) {
            assert_eq!(a.uv, b.uv);
            assert_eq!(a.position[0], b.position[0]);
            assert_eq!(a.position[2], b.position[2]);
        }
    }

    #[test]
    fn test_scroll_changes_noise_heights() {
        let mut field = HeightField::new(42);
        let params = params_with(HeightFunction::SingleOctaveNoise);
        let mut still = single_vertex(1.3, 2.7);
        let mut scrolled = still.clone();

        field.apply(&mut still, 0.0, &params, 0);
        field.apply(&mut scrolled, 0.0, &params, 5);

        assert_ne!(still[0].position[1], scrolled[0].position[1]);
    }

    #[test]
    fn test_ticker_throttles_fast_frames() {
        let mut ticker = ScrollTicker::new();
        // 60 fps for the first 0.29 seconds: no tick fires
        for frame in 0..18 {
            ticker.advance(frame as f32 / 60.0);
        }
        assert_eq!(ticker.offset(), 0);

        ticker.advance(0.3);
        assert_eq!(ticker.offset(), 1);
    }

    #[test]
    fn test_ticker_catches_up_after_long_gap() {
        let mut ticker = ScrollTicker::new();
        // A long stall leaves the reference time far behind; subsequent fast
        // frames each satisfy the gate until the debt is repaid.
        ticker.advance(1.0);
        assert_eq!(ticker.offset(), 1);
        ticker.advance(1.016);
        assert_eq!(ticker.offset(), 2);
        ticker.advance(1.033);
        assert_eq!(ticker.offset(), 3);
    }

    #[test]
    fn test_ticker_monotonic_and_resettable() {
        let mut ticker = ScrollTicker::new();
        let mut previous = 0;
        for frame in 0..500 {
            ticker.advance(frame as f32 * 0.05);
            assert!(ticker.offset() >= previous);
            previous = ticker.offset();
        }
        assert!(ticker.offset() > 0);

        ticker.reset();
        assert_eq!(ticker.offset(), 0);
    }
}
