//! Fractal noise built from octaves of lattice noise
//!
//! Each composer samples the lattice once per octave at `position * frequency`,
//! using the octave index as the seed so successive octaves are decorrelated.
//! After every octave the frequency is multiplied by `lacunarity` and the
//! amplitude by `gain`. Nothing is normalized: ridge and turbulence sums grow
//! with the octave count.

use super::perlin::sample_masked;
use crate::config::FractalConfig;

/// One octave of unwrapped lattice noise
#[inline]
fn octave(x: f32, y: f32, z: f32, frequency: f32, index: u32) -> f32 {
    // Seeds repeat every 256 octaves
    sample_masked(x * frequency, y * frequency, z * frequency, 0, 0, 0, index as u8)
}

/// Negative octave counts behave like zero
#[inline]
fn octave_count(octaves: i32) -> u32 {
    octaves.max(0) as u32
}

fn ridge(x: f32, y: f32, z: f32, lacunarity: f32, gain: f32, offset: f32, octaves: u32) -> f32 {
    let mut frequency = 1.0;
    let mut prev = 1.0;
    let mut amplitude = 0.5;
    let mut sum = 0.0;

    for i in 0..octaves {
        let mut r = octave(x, y, z, frequency, i);
        r = offset - r.abs();
        r = r * r;
        sum += r * amplitude * prev;
        prev = r;
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

fn fbm(x: f32, y: f32, z: f32, lacunarity: f32, gain: f32, octaves: u32) -> f32 {
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut sum = 0.0;

    for i in 0..octaves {
        sum += octave(x, y, z, frequency, i) * amplitude;
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

fn turbulence(x: f32, y: f32, z: f32, lacunarity: f32, gain: f32, octaves: u32) -> f32 {
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut sum = 0.0;

    for i in 0..octaves {
        let r = octave(x, y, z, frequency, i) * amplitude;
        sum += r.abs();
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Ridged multifractal noise
///
/// Each octave is folded around `offset` (`(offset - |n|)²`) and weighted by
/// the previous octave's folded value, which sharpens crests into ridges.
///
/// # Arguments
/// * `x`, `y`, `z` - Sample position
/// * `lacunarity` - Frequency multiplier per octave (~2.0)
/// * `gain` - Amplitude multiplier per octave (~0.5)
/// * `offset` - Ridge inversion offset (~1.0)
/// * `octaves` - Number of octaves; 0 or less returns 0.0
pub fn ridge_noise3(
    x: f32,
    y: f32,
    z: f32,
    lacunarity: f32,
    gain: f32,
    offset: f32,
    octaves: i32,
) -> f32 {
    ridge(x, y, z, lacunarity, gain, offset, octave_count(octaves))
}

/// Fractional Brownian motion
///
/// Plain sum of octaves; with gain 0.5 the result usually stays within
/// [-2, 2].
///
/// # Example
///
/// ```
/// use rust_perlin_noise::fbm_noise3;
///
/// assert_eq!(fbm_noise3(0.5, 0.5, 0.5, 2.0, 0.5, 6), -0.5);
/// assert_eq!(fbm_noise3(0.5, 0.5, 0.5, 2.0, 0.5, 0), 0.0);
/// ```
pub fn fbm_noise3(x: f32, y: f32, z: f32, lacunarity: f32, gain: f32, octaves: i32) -> f32 {
    fbm(x, y, z, lacunarity, gain, octave_count(octaves))
}

/// Turbulence: sum of absolute octave values
///
/// Always non-negative for non-negative gain. The folds at zero crossings
/// produce billowy, creased patterns.
pub fn turbulence_noise3(
    x: f32,
    y: f32,
    z: f32,
    lacunarity: f32,
    gain: f32,
    octaves: i32,
) -> f32 {
    turbulence(x, y, z, lacunarity, gain, octave_count(octaves))
}

/// [`ridge_noise3`] with parameters from a [`FractalConfig`]
pub fn ridge_with_config(x: f32, y: f32, z: f32, config: &FractalConfig) -> f32 {
    ridge(
        x,
        y,
        z,
        config.lacunarity,
        config.gain,
        config.offset,
        config.octaves,
    )
}

/// [`fbm_noise3`] with parameters from a [`FractalConfig`]
pub fn fbm_with_config(x: f32, y: f32, z: f32, config: &FractalConfig) -> f32 {
    fbm(x, y, z, config.lacunarity, config.gain, config.octaves)
}

/// [`turbulence_noise3`] with parameters from a [`FractalConfig`]
pub fn turbulence_with_config(x: f32, y: f32, z: f32, config: &FractalConfig) -> f32 {
    turbulence(x, y, z, config.lacunarity, config.gain, config.octaves)
}
