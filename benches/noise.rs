#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, Criterion};
use rust_perlin_noise::{
    fbm_noise3, noise3, noise3_wrap_nonpow2, ridge_noise3, turbulence_noise3,
};
use std::hint::black_box;

const OCTAVES: i32 = 6;
const LACUNARITY: f32 = 2.0;
const GAIN: f32 = 0.5;

/// Sample positions spread over several lattice cells.
fn positions() -> Vec<(f32, f32, f32)> {
    (0..256)
        .map(|i| {
            let t = i as f32;
            (t * 0.173 - 20.0, t * 0.311 + 3.5, t * -0.057)
        })
        .collect()
}

fn bench_lattice(c: &mut Criterion) {
    let points = positions();

    c.bench_function("noise3", |b| {
        b.iter(|| {
            for &(x, y, z) in &points {
                black_box(noise3(black_box(x), black_box(y), black_box(z), 0, 0, 0));
            }
        });
    });

    c.bench_function("noise3_wrap_nonpow2", |b| {
        b.iter(|| {
            for &(x, y, z) in &points {
                black_box(noise3_wrap_nonpow2(
                    black_box(x),
                    black_box(y),
                    black_box(z),
                    3,
                    5,
                    7,
                    0,
                ));
            }
        });
    });
}

fn bench_fractals(c: &mut Criterion) {
    let points = positions();
    let mut group = c.benchmark_group("fractal");

    group.bench_function("ridge", |b| {
        b.iter(|| {
            for &(x, y, z) in &points {
                black_box(ridge_noise3(x, y, z, LACUNARITY, GAIN, 1.0, black_box(OCTAVES)));
            }
        });
    });

    group.bench_function("fbm", |b| {
        b.iter(|| {
            for &(x, y, z) in &points {
                black_box(fbm_noise3(x, y, z, LACUNARITY, GAIN, black_box(OCTAVES)));
            }
        });
    });

    group.bench_function("turbulence", |b| {
        b.iter(|| {
            for &(x, y, z) in &points {
                black_box(turbulence_noise3(x, y, z, LACUNARITY, GAIN, black_box(OCTAVES)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lattice, bench_fractals);
criterion_main!(benches);
