//! Noise sampling
//!
//! Provides the raw lattice and fractal noise functions plus a trait for
//! sampling configured noise at 3D positions.

mod fractal;
mod perlin;
mod tables;

pub use fractal::{
    fbm_noise3, fbm_with_config, ridge_noise3, ridge_with_config, turbulence_noise3,
    turbulence_with_config,
};
pub use perlin::{noise3, noise3_seed, noise3_wrap_nonpow2};

use glam::Vec3;

use crate::config::{FractalConfig, LatticeConfig, WrapMode};

/// Fractal composition applied by a [`FractalSampler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FractalKind {
    /// Ridged multifractal, sharp crests
    Ridge,
    /// Fractional Brownian motion
    #[default]
    Fbm,
    /// Sum of absolute octaves
    Turbulence,
}

/// Trait for sampling scalar noise at 3D positions
///
/// Implementations are pure: the same position always yields the same value,
/// and samplers can be shared across threads.
pub trait NoiseSampler {
    /// Sample noise at a position
    fn sample(&self, position: Vec3) -> f32;
}

impl<S: NoiseSampler + ?Sized> NoiseSampler for &S {
    fn sample(&self, position: Vec3) -> f32 {
        (**self).sample(position)
    }
}

/// Single-octave lattice noise with a fixed seed and tiling
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerlinSampler {
    /// Seed, wrap periods and wrap mode
    pub config: LatticeConfig,
}

impl PerlinSampler {
    /// Create a sampler from a configuration
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Unwrapped noise for one of the 256 seeds
    pub fn with_seed(seed: u8) -> Self {
        Self {
            config: LatticeConfig {
                seed,
                ..Default::default()
            },
        }
    }
}

impl NoiseSampler for PerlinSampler {
    fn sample(&self, position: Vec3) -> f32 {
        let LatticeConfig { seed, wrap, mode } = self.config;
        match mode {
            WrapMode::Mask => noise3_seed(
                position.x,
                position.y,
                position.z,
                wrap.x,
                wrap.y,
                wrap.z,
                seed as i32,
            ),
            WrapMode::Modulo => noise3_wrap_nonpow2(
                position.x,
                position.y,
                position.z,
                wrap.x,
                wrap.y,
                wrap.z,
                seed as i32,
            ),
        }
    }
}

/// Fractal noise sampler
///
/// Scales the position by `frequency` before running the composer, so a
/// lower frequency gives larger features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSampler {
    /// Which composer to run
    pub kind: FractalKind,
    /// Octave parameters
    pub config: FractalConfig,
    /// Base frequency applied to positions (default: 1.0)
    pub frequency: f32,
}

impl Default for FractalSampler {
    fn default() -> Self {
        Self {
            kind: FractalKind::default(),
            config: FractalConfig::default(),
            frequency: 1.0,
        }
    }
}

impl FractalSampler {
    /// Create a sampler with default frequency
    pub fn new(kind: FractalKind, config: FractalConfig) -> Self {
        Self {
            kind,
            config,
            ..Default::default()
        }
    }

    /// Set the base frequency
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }
}

impl NoiseSampler for FractalSampler {
    fn sample(&self, position: Vec3) -> f32 {
        let p = position * self.frequency;
        match self.kind {
            FractalKind::Ridge => ridge_with_config(p.x, p.y, p.z, &self.config),
            FractalKind::Fbm => fbm_with_config(p.x, p.y, p.z, &self.config),
            FractalKind::Turbulence => turbulence_with_config(p.x, p.y, p.z, &self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatticeConfigBuilder, LatticeWrap};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_positions(seed: u64, count: usize) -> Vec<Vec3> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_perlin_sampler_matches_functions() {
        let masked = PerlinSampler::new(
            LatticeConfigBuilder::new()
                .seed(17)
                .wrap(LatticeWrap::new(8, 0, 32))
                .unwrap()
                .build()
                .unwrap(),
        );
        let modulo = PerlinSampler::new(
            LatticeConfigBuilder::new()
                .seed(17)
                .mode(WrapMode::Modulo)
                .wrap(LatticeWrap::new(6, 10, 0))
                .unwrap()
                .build()
                .unwrap(),
        );

        for p in random_positions(7, 64) {
            assert_eq!(
                masked.sample(p).to_bits(),
                noise3_seed(p.x, p.y, p.z, 8, 0, 32, 17).to_bits()
            );
            assert_eq!(
                modulo.sample(p).to_bits(),
                noise3_wrap_nonpow2(p.x, p.y, p.z, 6, 10, 0, 17).to_bits()
            );
        }
    }

    #[test]
    fn test_fractal_sampler_kinds() {
        let config = FractalConfig::default();
        let p = Vec3::new(1.25, 2.5, 3.75);

        let ridge = FractalSampler::new(FractalKind::Ridge, config);
        let fbm = FractalSampler::new(FractalKind::Fbm, config);
        let turbulence = FractalSampler::new(FractalKind::Turbulence, config);

        assert_eq!(ridge.sample(p).to_bits(), 0x3f1f_b360);
        assert_eq!(fbm.sample(p).to_bits(), 0xbd8f_b040);
        assert_eq!(turbulence.sample(p).to_bits(), 0x3e9c_13f0);
    }

    #[test]
    fn test_fractal_sampler_frequency() {
        let sampler = FractalSampler::new(FractalKind::Fbm, FractalConfig::smooth())
            .with_frequency(0.5);
        let p = Vec3::new(2.5, 5.0, 7.5);
        assert_eq!(
            sampler.sample(p),
            fbm_with_config(1.25, 2.5, 3.75, &FractalConfig::smooth())
        );
    }

    #[test]
    fn test_sampler_determinism() {
        let samplers: [&dyn NoiseSampler; 3] = [
            &PerlinSampler::with_seed(200),
            &FractalSampler::new(FractalKind::Ridge, FractalConfig::rough()),
            &FractalSampler::new(FractalKind::Turbulence, FractalConfig::default()),
        ];
        for p in random_positions(99, 32) {
            for sampler in samplers {
                assert_eq!(sampler.sample(p).to_bits(), sampler.sample(p).to_bits());
            }
        }
    }

    #[test]
    fn test_lattice_range() {
        let sampler = PerlinSampler::with_seed(0);
        for p in random_positions(3, 2000) {
            let value = sampler.sample(p);
            assert!(value.abs() <= 1.1, "value {} at {:?}", value, p);
        }
    }

    #[test]
    fn test_samplers_shared_across_threads() {
        let sampler = FractalSampler::new(FractalKind::Fbm, FractalConfig::default());
        let positions = random_positions(11, 16);
        let expected: Vec<u32> = positions.iter().map(|&p| sampler.sample(p).to_bits()).collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let actual: Vec<u32> =
                        positions.iter().map(|&p| sampler.sample(p).to_bits()).collect();
                    assert_eq!(actual, expected);
                });
            }
        });
    }
}
