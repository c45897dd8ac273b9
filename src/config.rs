//! Noise Configuration and Builders
//!
//! The raw sampling functions accept any input. The types in this module add
//! validation on top of them for callers that want tiling guarantees and sane
//! fractal parameters up front.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

/// Largest period the lattice can express; every field repeats at this period
pub const MAX_WRAP_PERIOD: i32 = 256;

/// Upper bound on fractal octaves accepted by [`FractalConfigBuilder`]
pub const MAX_OCTAVES: u32 = 64;

/// How wrap periods are applied to lattice coordinates
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Bit-mask wrapping; periods must be 0 or a power of two
    #[default]
    Mask,
    /// Modulo wrapping; any period in 0..=256
    ///
    /// Produces a different field than `Mask` even for power-of-two periods.
    Modulo,
}

/// Tiling period per axis
///
/// A period of 0 means "don't care", which still repeats every 256 units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatticeWrap {
    /// Period along x
    pub x: i32,
    /// Period along y
    pub y: i32,
    /// Period along z
    pub z: i32,
}

impl LatticeWrap {
    /// No wrapping requested on any axis
    pub const NONE: LatticeWrap = LatticeWrap { x: 0, y: 0, z: 0 };

    /// Create a wrap with a period per axis
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same period on every axis
    pub const fn uniform(period: i32) -> Self {
        Self::new(period, period, period)
    }

    /// Check that every period can be used with bit-mask wrapping
    pub fn is_power_of_two(&self) -> bool {
        self.axes().iter().all(|&(_, p)| is_mask_period(p))
    }

    fn axes(&self) -> [(char, i32); 3] {
        [('x', self.x), ('y', self.y), ('z', self.z)]
    }

    /// Validate every period against a wrap mode
    ///
    /// # Errors
    ///
    /// Returns `InvalidWrap` for the first axis whose period is unusable.
    pub fn validate(&self, mode: WrapMode) -> Result<()> {
        for (axis, period) in self.axes() {
            let valid = match mode {
                WrapMode::Mask => is_mask_period(period),
                WrapMode::Modulo => (0..=MAX_WRAP_PERIOD).contains(&period),
            };
            if !valid {
                return Err(NoiseError::InvalidWrap { axis, period });
            }
        }
        Ok(())
    }
}

fn is_mask_period(period: i32) -> bool {
    period == 0 || (period <= MAX_WRAP_PERIOD && period > 0 && (period & (period - 1)) == 0)
}

/// Configuration for single-octave lattice noise
///
/// # Example
///
/// ```rust
/// use rust_perlin_noise::*;
///
/// let config = LatticeConfigBuilder::new()
///     .seed(7)
///     .wrap(LatticeWrap::new(16, 16, 0))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.mode, WrapMode::Mask);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatticeConfig {
    /// Selects one of 256 noise variations
    pub seed: u8,
    /// Tiling period per axis
    pub wrap: LatticeWrap,
    /// How `wrap` is applied
    pub mode: WrapMode,
}

/// Builder for creating LatticeConfig with validation
#[derive(Debug, Clone, Default)]
pub struct LatticeConfigBuilder {
    seed: Option<u8>,
    wrap: LatticeWrap,
    mode: WrapMode,
}

impl LatticeConfigBuilder {
    /// Create a new builder
    ///
    /// Defaults:
    /// - seed: Random
    /// - wrap: none
    /// - mode: Mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the noise variation
    pub fn seed(mut self, seed: u8) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the wrap mode
    ///
    /// Set the mode before the periods: periods are checked against the mode
    /// in effect when [`wrap`](Self::wrap) is called, and again in `build()`.
    pub fn mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the tiling periods
    ///
    /// # Errors
    ///
    /// Returns `InvalidWrap` if a period does not fit the current wrap mode
    pub fn wrap(mut self, wrap: LatticeWrap) -> Result<Self> {
        wrap.validate(self.mode)?;
        self.wrap = wrap;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, picks a random one using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWrap` if the mode was switched after setting periods
    /// it does not accept
    pub fn build(self) -> Result<LatticeConfig> {
        self.wrap.validate(self.mode)?;

        let seed = self.seed.unwrap_or_else(|| {
            let seed: u8 = rand::random();
            tracing::debug!(seed, "no lattice seed supplied, using random seed");
            seed
        });

        let config = LatticeConfig {
            seed,
            wrap: self.wrap,
            mode: self.mode,
        };
        tracing::trace!(?config, "built lattice config");
        Ok(config)
    }
}

/// Configuration for fractal (multi-octave) noise
///
/// Defaults follow the usual starting point: 6 octaves, lacunarity 2.0,
/// gain 0.5 and a ridge offset of 1.0. Use exactly 2.0 for lacunarity if the
/// output must keep the base lattice's tiling.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    /// Frequency multiplier per octave
    pub lacunarity: f32,
    /// Amplitude multiplier per octave
    pub gain: f32,
    /// Ridge inversion offset (ridge noise only)
    pub offset: f32,
    /// Number of octaves to sum
    pub octaves: u32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            lacunarity: 2.0,
            gain: 0.5,
            offset: 1.0,
            octaves: 6,
        }
    }
}

impl FractalConfig {
    /// Few octaves with fast amplitude falloff
    pub fn smooth() -> Self {
        Self {
            gain: 0.35,
            octaves: 4,
            ..Default::default()
        }
    }

    /// Many octaves with slow amplitude falloff
    pub fn rough() -> Self {
        Self {
            lacunarity: 2.1,
            gain: 0.6,
            octaves: 8,
            ..Default::default()
        }
    }

    /// Sum of all octave amplitudes for fBm and turbulence
    ///
    /// Bounds the magnitude of the sum when every octave is at its peak.
    pub fn amplitude_sum(&self) -> f32 {
        let mut amplitude = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.gain;
        }
        sum
    }
}

/// Builder for creating FractalConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_perlin_noise::*;
///
/// let config = FractalConfigBuilder::new()
///     .octaves(4)
///     .unwrap()
///     .gain(0.6)
///     .unwrap()
///     .build();
///
/// assert_eq!(config.octaves, 4);
/// assert_eq!(config.lacunarity, 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FractalConfigBuilder {
    config: FractalConfig,
}

impl FractalConfigBuilder {
    /// Create a new builder starting from `FractalConfig::default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: FractalConfig) -> Self {
        Self { config }
    }

    /// Set the per-octave frequency multiplier
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if lacunarity is not finite
    pub fn lacunarity(mut self, lacunarity: f32) -> Result<Self> {
        self.config.lacunarity = finite("lacunarity", lacunarity)?;
        Ok(self)
    }

    /// Set the per-octave amplitude multiplier
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if gain is not finite
    pub fn gain(mut self, gain: f32) -> Result<Self> {
        self.config.gain = finite("gain", gain)?;
        Ok(self)
    }

    /// Set the ridge offset
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if offset is not finite
    pub fn offset(mut self, offset: f32) -> Result<Self> {
        self.config.offset = finite("offset", offset)?;
        Ok(self)
    }

    /// Set the number of octaves
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if octaves > 64
    pub fn octaves(mut self, octaves: u32) -> Result<Self> {
        if octaves > MAX_OCTAVES {
            return Err(NoiseError::InvalidConfig(format!(
                "octaves must be <= {} (got {})",
                MAX_OCTAVES, octaves
            )));
        }
        self.config.octaves = octaves;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> FractalConfig {
        tracing::trace!(config = ?self.config, "built fractal config");
        self.config
    }
}

fn finite(name: &str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::InvalidConfig(format!(
            "{} must be finite (got {})",
            name, value
        )))
    }
}
