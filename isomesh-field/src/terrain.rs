use isomesh_math::Point3;
use noise::{Fbm, MultiFractal, NoiseFn};

use crate::ScalarField;

/// Terrain density: fractal noise heightmap, positive below the surface
///
/// Each advance scrolls the noise along X axis by `scroll` units.
pub struct NoiseTerrain {
    noise: Fbm,
    /// Height amplitude of the noise
    pub amplitude: f32,
    /// Horizontal scale of the noise features
    pub scale: f32,
    /// Distance scrolled by each advance
    pub scroll: f32,
    offset: f32,
}

impl Default for NoiseTerrain {
    fn default() -> Self {
        Self::new(8, 1.1, 4.5, 0.1)
    }
}

impl NoiseTerrain {
    /// Constructs the terrain from fractal noise settings
    pub fn new(octaves: usize, frequency: f64, lacunarity: f64, persistence: f64) -> Self {
        let noise = Fbm::new()
            .set_octaves(octaves)
            .set_frequency(frequency)
            .set_lacunarity(lacunarity)
            .set_persistence(persistence);
        Self {
            noise,
            amplitude: 4.0,
            scale: 2.0,
            scroll: 1.0,
            offset: 0.0,
        }
    }

    /// Sets height amplitude
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets horizontal scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets scroll distance per advance
    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    /// Returns terrain height at the XZ position
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let xf = ((x + self.offset) / self.scale) as f64;
        let zf = (z / self.scale) as f64;
        self.amplitude * self.noise.get([xf, zf]) as f32
    }
}

impl ScalarField for NoiseTerrain {
    fn evaluate(&self, position: Point3) -> f32 {
        self.height(position.x, position.z) - position.y
    }

    fn advance(&mut self) {
        self.offset += self.scroll;
    }
}
