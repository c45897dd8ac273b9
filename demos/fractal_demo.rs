//! Demonstration of the fractal noise samplers
//!
//! Renders a small ASCII heightfield for each composer.

use rust_perlin_noise::{
    FractalConfig, FractalKind, FractalSampler, NoiseSampler, PerlinSampler, Vec3,
};

const WIDTH: usize = 64;
const HEIGHT: usize = 24;
const SHADES: &[u8] = b" .:-=+*#%@";

fn render(label: &str, sampler: &dyn NoiseSampler, min: f32, max: f32) {
    println!("{} (range {:.2} .. {:.2})", label, min, max);
    println!("{:-<64}", "");

    let mut lowest = f32::MAX;
    let mut highest = f32::MIN;

    for row in 0..HEIGHT {
        let line: String = (0..WIDTH)
            .map(|col| {
                let position = Vec3::new(col as f32 * 0.125, row as f32 * 0.25, 0.5);
                let value = sampler.sample(position);
                lowest = lowest.min(value);
                highest = highest.max(value);

                let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
                let shade = (t * (SHADES.len() - 1) as f32).round() as usize;
                SHADES[shade] as char
            })
            .collect();
        println!("{}", line);
    }

    println!("observed {:.3} .. {:.3}\n", lowest, highest);
}

fn main() {
    println!("Fractal Noise Demo\n");

    let config = FractalConfig::default();
    println!(
        "octaves = {}, lacunarity = {}, gain = {}, offset = {}\n",
        config.octaves, config.lacunarity, config.gain, config.offset
    );

    render("Perlin (seed 0)", &PerlinSampler::with_seed(0), -1.0, 1.0);
    render(
        "fBm",
        &FractalSampler::new(FractalKind::Fbm, config),
        -1.0,
        1.0,
    );
    render(
        "Turbulence",
        &FractalSampler::new(FractalKind::Turbulence, config),
        0.0,
        1.2,
    );
    render(
        "Ridge",
        &FractalSampler::new(FractalKind::Ridge, config),
        0.0,
        1.0,
    );
}
