//! Deterministic 3D Perlin noise
//!
//! A pure-function noise library for procedural terrain and textures.
//! Every function returns the same bits for the same inputs on every
//! platform, so fields can be regenerated instead of stored.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_perlin_noise::*;
//!
//! // Raw functions
//! let height = fbm_noise3(0.5, 0.5, 0.5, 2.0, 0.5, 6);
//! let tiled = noise3(1.25, 2.5, 3.75, 16, 16, 16);
//!
//! // Configured samplers
//! let sampler = FractalSampler::new(FractalKind::Ridge, FractalConfig::default())
//!     .with_frequency(0.25);
//! let ridge = sampler.sample(Vec3::new(10.0, 4.0, -3.0));
//! # let _ = (height, tiled, ridge);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration types

// Modules
pub mod config;
pub mod error;
pub mod noise;

// Re-export core types for convenience
pub use config::{
    FractalConfig, FractalConfigBuilder, LatticeConfig, LatticeConfigBuilder, LatticeWrap,
    WrapMode,
};
pub use error::{NoiseError, Result};
pub use noise::{
    fbm_noise3, fbm_with_config, noise3, noise3_seed, noise3_wrap_nonpow2, ridge_noise3,
    ridge_with_config, turbulence_noise3, turbulence_with_config, FractalKind, FractalSampler,
    NoiseSampler, PerlinSampler,
};

// Re-export glam::Vec3 for convenience
pub use glam::Vec3;
