//! 3D gradient noise on an integer lattice
//!
//! Implements Ken Perlin's revised (2002) noise: quintic fade, 12 edge
//! gradients, and trilinear blending of the 8 cell corners. Hashing runs
//! through the fixed tables in [`super::tables`], so the field is identical on
//! every platform and in every build.
//!
//! All arithmetic is `f32` and the order of operations is fixed. Reordering
//! an expression (or evaluating it in `f64`) changes output bits.

use super::tables::{GRADIENT_BASIS, GRADIENT_INDEX, PERMUTATION};

/// Period used when a wrap of 0 is requested
const FULL_PERIOD: i32 = 256;

// ============================================================================
// HELPERS
// ============================================================================

/// Linear interpolation
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Floor toward negative infinity
///
/// Truncation alone rounds negative coordinates toward zero, which would put
/// e.g. -0.5 in cell 0 instead of cell -1.
#[inline]
fn fast_floor(a: f32) -> i32 {
    let ai = a as i32;
    if a < ai as f32 {
        ai.wrapping_sub(1)
    } else {
        ai
    }
}

/// Quintic smoothstep: 6t⁵ - 15t⁴ + 10t³
#[inline]
fn fade(t: f32) -> f32 {
    ((t * 6.0 - 15.0) * t + 10.0) * t * t * t
}

/// Dot product of a basis gradient with a corner-relative offset
#[inline]
fn grad(index: u8, x: f32, y: f32, z: f32) -> f32 {
    let g = GRADIENT_BASIS[index as usize];
    g[0] as f32 * x + g[1] as f32 * y + g[2] as f32 * z
}

#[inline]
fn perm(index: usize) -> usize {
    PERMUTATION[index] as usize
}

/// Lattice indices of the cell containing a point, already wrapped
struct LatticeCell {
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
    z0: usize,
    z1: usize,
}

/// Blend the 8 corner gradients of a cell
///
/// `r00..r11` are the hashed (x, y) columns; `x, y, z` are the offsets of the
/// sample inside the cell.
#[allow(clippy::too_many_arguments)]
#[inline]
fn blend_corners(
    cell: &LatticeCell,
    r00: usize,
    r01: usize,
    r10: usize,
    r11: usize,
    x: f32,
    y: f32,
    z: f32,
) -> f32 {
    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let n000 = grad(GRADIENT_INDEX[r00 + cell.z0], x, y, z);
    let n001 = grad(GRADIENT_INDEX[r00 + cell.z1], x, y, z - 1.0);
    let n010 = grad(GRADIENT_INDEX[r01 + cell.z0], x, y - 1.0, z);
    let n011 = grad(GRADIENT_INDEX[r01 + cell.z1], x, y - 1.0, z - 1.0);
    let n100 = grad(GRADIENT_INDEX[r10 + cell.z0], x - 1.0, y, z);
    let n101 = grad(GRADIENT_INDEX[r10 + cell.z1], x - 1.0, y, z - 1.0);
    let n110 = grad(GRADIENT_INDEX[r11 + cell.z0], x - 1.0, y - 1.0, z);
    let n111 = grad(GRADIENT_INDEX[r11 + cell.z1], x - 1.0, y - 1.0, z - 1.0);

    let n00 = lerp(n000, n001, w);
    let n01 = lerp(n010, n011, w);
    let n10 = lerp(n100, n101, w);
    let n11 = lerp(n110, n111, w);

    let n0 = lerp(n00, n01, v);
    let n1 = lerp(n10, n11, v);

    lerp(n0, n1, u)
}

// ============================================================================
// POWER-OF-TWO LATTICE
// ============================================================================

/// Core sampler shared by [`noise3`], [`noise3_seed`] and the fractals
///
/// Wrap periods are applied as bit masks, so they must be 0 or a power of two.
/// Other values do not panic but produce a field that does not tile.
pub(crate) fn sample_masked(
    x: f32,
    y: f32,
    z: f32,
    x_wrap: i32,
    y_wrap: i32,
    z_wrap: i32,
    seed: u8,
) -> f32 {
    let x_mask = x_wrap.wrapping_sub(1) & 255;
    let y_mask = y_wrap.wrapping_sub(1) & 255;
    let z_mask = z_wrap.wrapping_sub(1) & 255;

    let px = fast_floor(x);
    let py = fast_floor(y);
    let pz = fast_floor(z);

    // Masks are <= 255, so every index below stays in 0..=255
    let cell = LatticeCell {
        x0: (px & x_mask) as usize,
        x1: (px.wrapping_add(1) & x_mask) as usize,
        y0: (py & y_mask) as usize,
        y1: (py.wrapping_add(1) & y_mask) as usize,
        z0: (pz & z_mask) as usize,
        z1: (pz.wrapping_add(1) & z_mask) as usize,
    };

    let seed = seed as usize;
    let r0 = perm(cell.x0 + seed);
    let r1 = perm(cell.x1 + seed);

    let r00 = perm(r0 + cell.y0);
    let r01 = perm(r0 + cell.y1);
    let r10 = perm(r1 + cell.y0);
    let r11 = perm(r1 + cell.y1);

    blend_corners(
        &cell,
        r00,
        r01,
        r10,
        r11,
        x - px as f32,
        y - py as f32,
        z - pz as f32,
    )
}

/// Sample 3D Perlin noise
///
/// Adjacent values are continuous, and the value at every integer lattice
/// point is exactly 0.
///
/// # Arguments
/// * `x`, `y`, `z` - Sample position
/// * `x_wrap`, `y_wrap`, `z_wrap` - Tiling period per axis. Must be 0 ("don't
///   care") or a power of two. The field always repeats every 256 units no
///   matter what is requested.
///
/// # Returns
/// A value near [-1, 1]. The output is not clamped.
///
/// # Example
///
/// ```
/// use rust_perlin_noise::noise3;
///
/// let value = noise3(0.5, 0.5, 0.5, 0, 0, 0);
/// assert_eq!(value, -0.5);
///
/// // Wrapping at 4 makes the field tile along x
/// assert_eq!(noise3(1.25, 0.5, 0.5, 4, 0, 0), noise3(5.25, 0.5, 0.5, 4, 0, 0));
/// ```
pub fn noise3(x: f32, y: f32, z: f32, x_wrap: i32, y_wrap: i32, z_wrap: i32) -> f32 {
    sample_masked(x, y, z, x_wrap, y_wrap, z_wrap, 0)
}

/// Sample 3D Perlin noise from one of 256 seeded variations
///
/// Same as [`noise3`], but `seed` selects a different noise field. Only the
/// low 8 bits of `seed` are used, so seeds 7 and 263 give the same field.
pub fn noise3_seed(
    x: f32,
    y: f32,
    z: f32,
    x_wrap: i32,
    y_wrap: i32,
    z_wrap: i32,
    seed: i32,
) -> f32 {
    sample_masked(x, y, z, x_wrap, y_wrap, z_wrap, seed as u8)
}

// ============================================================================
// ARBITRARY-PERIOD LATTICE
// ============================================================================

/// Wrap a lattice coordinate into `[0, period)`, then into the table period
#[inline]
fn wrap_index(p: i32, period: i32) -> (usize, usize) {
    let mut i0 = p.wrapping_rem(period);
    if i0 < 0 {
        i0 = i0.wrapping_add(period);
    }
    let i1 = i0.wrapping_add(1).wrapping_rem(period);
    // No-op for periods in 1..=256
    ((i0 & 255) as usize, (i1 & 255) as usize)
}

/// Sample 3D Perlin noise that tiles at arbitrary integer periods
///
/// Unlike [`noise3`], the wrap periods need not be powers of two: lattice
/// coordinates are reduced with a true modulo. A period of 0 means 256.
///
/// The seed is applied after the first coordinate hash rather than before
/// it, so this produces a different field than [`noise3_seed`] even when the
/// periods are powers of two.
///
/// # Example
///
/// ```
/// use rust_perlin_noise::noise3_wrap_nonpow2;
///
/// let a = noise3_wrap_nonpow2(0.75, 1.5, 2.25, 3, 5, 7, 0);
/// let b = noise3_wrap_nonpow2(3.75, 6.5, 9.25, 3, 5, 7, 0);
/// assert_eq!(a, b);
/// ```
pub fn noise3_wrap_nonpow2(
    x: f32,
    y: f32,
    z: f32,
    x_wrap: i32,
    y_wrap: i32,
    z_wrap: i32,
    seed: i32,
) -> f32 {
    let px = fast_floor(x);
    let py = fast_floor(y);
    let pz = fast_floor(z);

    let period = |wrap: i32| if wrap != 0 { wrap } else { FULL_PERIOD };
    let (x0, x1) = wrap_index(px, period(x_wrap));
    let (y0, y1) = wrap_index(py, period(y_wrap));
    let (z0, z1) = wrap_index(pz, period(z_wrap));
    let cell = LatticeCell { x0, x1, y0, y1, z0, z1 };

    let seed = seed as u8 as usize;
    let r0 = perm(perm(cell.x0) + seed);
    let r1 = perm(perm(cell.x1) + seed);

    let r00 = perm(r0 + cell.y0);
    let r01 = perm(r0 + cell.y1);
    let r10 = perm(r1 + cell.y0);
    let r11 = perm(r1 + cell.y1);

    blend_corners(
        &cell,
        r00,
        r01,
        r10,
        r11,
        x - px as f32,
        y - py as f32,
        z - pz as f32,
    )
}
