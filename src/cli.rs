//! Command-line argument parsing.

use clap::Parser;

use crate::params::{HeightFunction, TerrainParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Terraplane")]
#[command(about = "Interactive deformable terrain mesh demo", long_about = None)]
pub struct Args {
    /// Height function: sine, uniform, randnoise, fractal, noise
    #[arg(long, value_name = "FUNCTION", default_value = "fractal")]
    pub height_function: String,

    /// World-space extent of the terrain plane (meters per side)
    #[arg(long, value_name = "METERS", default_value = "20")]
    pub size: f32,

    /// Vertex count per grid edge
    #[arg(long, value_name = "COUNT", default_value = "50")]
    pub subdivisions: u32,

    /// Global height multiplier
    #[arg(long, value_name = "FACTOR", default_value = "1.0")]
    pub height_mult: f32,

    /// Coherent-noise seed
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u32,
}

impl Args {
    /// Parse the height-function name from command-line arguments
    pub fn parse_height_function(&self) -> HeightFunction {
        match self.height_function.to_lowercase().as_str() {
            "sine" => HeightFunction::Sine,
            "uniform" => HeightFunction::Uniform,
            "randnoise" | "random" => HeightFunction::RandomNoise,
            "fractal" => HeightFunction::FractalNoise,
            "noise" => HeightFunction::SingleOctaveNoise,
            other => {
                log::warn!("Unknown height function '{}', using fractal", other);
                HeightFunction::FractalNoise
            }
        }
    }

    /// Build the initial terrain parameters
    pub fn initial_terrain_params(&self) -> TerrainParams {
        let mut params = TerrainParams::new();
        params.set_plane_size(self.size);
        params.set_subdivisions(self.subdivisions);
        params.set_height_mult(self.height_mult);
        params.set_height_function(self.parse_height_function());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_function(name: &str) -> Args {
        Args {
            height_function: name.to_string(),
            size: 20.0,
            subdivisions: 50,
            height_mult: 1.0,
            seed: 42,
        }
    }

    #[test]
    fn test_parse_height_function_names() {
        assert_eq!(
            args_with_function("sine").parse_height_function(),
            HeightFunction::Sine
        );
        assert_eq!(
            args_with_function("UNIFORM").parse_height_function(),
            HeightFunction::Uniform
        );
        assert_eq!(
            args_with_function("randnoise").parse_height_function(),
            HeightFunction::RandomNoise
        );
        assert_eq!(
            args_with_function("noise").parse_height_function(),
            HeightFunction::SingleOctaveNoise
        );
    }

    #[test]
    fn test_unknown_height_function_falls_back_to_fractal() {
        assert_eq!(
            args_with_function("plasma").parse_height_function(),
            HeightFunction::FractalNoise
        );
    }

    #[test]
    fn test_initial_terrain_params() {
        let mut args = args_with_function("sine");
        args.size = 40.0;
        args.subdivisions = 10;
        args.height_mult = 2.0;

        let params = args.initial_terrain_params();
        assert_eq!(params.dimensions.size, 40.0);
        assert_eq!(params.dimensions.subdivisions, 10);
        assert_eq!(params.height_mult, 2.0);
        assert_eq!(params.height_function, HeightFunction::Sine);
    }
}
