// Copyright (c) 2026 rezky_nightky

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::config::{NOISE_ALPHA, NOISE_BETA, NOISE_OCTAVES, NOISE_SEED};

/// Seeded fBm Perlin noise sampled at integer cell coordinates. Octaves are
/// summed without normalising, octave `i` weighted by `1 / ALPHA^i`.
pub struct NoiseField {
    noise: FastNoiseLite,
    amplitude: f32,
}

impl NoiseField {
    pub fn new() -> Self {
        let mut noise = FastNoiseLite::with_seed(NOISE_SEED);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some(NOISE_OCTAVES));
        noise.set_fractal_gain(Some(1.0 / NOISE_ALPHA));
        noise.set_fractal_lacunarity(Some(NOISE_BETA));

        // fastnoise divides the fBm sum by the total octave weight; undo it.
        let gain = 1.0 / NOISE_ALPHA;
        let amplitude = (0..NOISE_OCTAVES).map(|i| gain.powi(i)).sum();
        Self { noise, amplitude }
    }

    pub fn sample(&self, x: i32, y: i32) -> f32 {
        self.noise.get_noise_2d(x as f32, y as f32) * self.amplitude
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}
