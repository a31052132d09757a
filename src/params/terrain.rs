//! Terrain mesh and height-function parameters.

/// Height function applied to every grid vertex each update tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightFunction {
    /// Layered sine/cosine wave driven by elapsed time
    Sine,
    /// Constant height of 1 (ignores every other parameter)
    Uniform,
    /// Fresh uniform sample per vertex per tick (intentional flicker)
    RandomNoise,
    /// Multi-octave coherent noise, scrolled over time
    FractalNoise,
    /// Single coherent-noise evaluation, scrolled over time
    SingleOctaveNoise,
}

impl HeightFunction {
    /// Cycle to the next variant (parameter-panel style selection).
    pub fn next(self) -> Self {
        match self {
            Self::Sine => Self::Uniform,
            Self::Uniform => Self::RandomNoise,
            Self::RandomNoise => Self::FractalNoise,
            Self::FractalNoise => Self::SingleOctaveNoise,
            Self::SingleOctaveNoise => Self::Sine,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Uniform => "uniform",
            Self::RandomNoise => "randnoise",
            Self::FractalNoise => "fractal",
            Self::SingleOctaveNoise => "noise",
        }
    }
}

impl Default for HeightFunction {
    fn default() -> Self {
        Self::FractalNoise
    }
}

/// Coherent-noise composition parameters
#[derive(Debug, Clone)]
pub struct NoiseParams {
    /// Spatial frequency of the first octave (the "width" of the pattern)
    pub frequency: f32,

    /// Amplitude of the first octave (the "height" of its features)
    pub amplitude: f32,

    /// Frequency multiplier between successive octaves (typically 2.0)
    pub lacunarity: f32,

    /// Amplitude multiplier between successive octaves (usually 1/lacunarity)
    pub persistence: f32,

    /// Number of noise layers summed by the fractal variant (>= 1)
    pub octaves: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            lacunarity: 2.0,
            persistence: 0.5,
            octaves: 2,
        }
    }
}

/// Dimensions of the square terrain plane
#[derive(Debug, Clone, PartialEq)]
pub struct GridDimensions {
    /// World-space extent of the plane (meters per side)
    pub size: f32,

    /// Vertex count per edge (total vertices = subdivisions^2)
    pub subdivisions: u32,
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            size: 20.0,
            subdivisions: 50,
        }
    }
}

/// Full terrain configuration, owned by the application loop and passed by
/// reference into the height generator each tick.
#[derive(Debug, Clone)]
pub struct TerrainParams {
    pub dimensions: GridDimensions,
    pub noise: NoiseParams,
    pub height_function: HeightFunction,
    /// Global height multiplier (not applied by the Uniform variant)
    pub height_mult: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainParams {
    pub fn new() -> Self {
        Self {
            dimensions: GridDimensions::default(),
            noise: NoiseParams::default(),
            height_function: HeightFunction::default(),
            height_mult: 1.0,
        }
    }

    /// Set the plane's world extent. Returns true: the grid must be rebuilt.
    pub fn set_plane_size(&mut self, size: f32) -> bool {
        self.dimensions.size = size.max(1.0);
        true
    }

    /// Set the vertex count per edge. Returns true: the grid must be rebuilt.
    pub fn set_subdivisions(&mut self, subdivisions: u32) -> bool {
        self.dimensions.subdivisions = subdivisions.max(2);
        true
    }

    /// Select the active height function. No rebuild required.
    pub fn set_height_function(&mut self, function: HeightFunction) -> bool {
        self.height_function = function;
        false
    }

    pub fn set_height_mult(&mut self, height_mult: f32) -> bool {
        self.height_mult = height_mult;
        false
    }

    pub fn set_octaves(&mut self, octaves: u32) -> bool {
        self.noise.octaves = octaves.clamp(1, 20);
        false
    }

    pub fn set_frequency(&mut self, frequency: f32) -> bool {
        self.noise.frequency = frequency.clamp(0.1, 20.0);
        false
    }

    pub fn set_amplitude(&mut self, amplitude: f32) -> bool {
        self.noise.amplitude = amplitude.clamp(0.1, 20.0);
        false
    }

    pub fn set_lacunarity(&mut self, lacunarity: f32) -> bool {
        self.noise.lacunarity = lacunarity.clamp(0.1, 20.0);
        false
    }

    pub fn set_persistence(&mut self, persistence: f32) -> bool {
        self.noise.persistence = persistence.clamp(0.1, 20.0);
        false
    }
}
