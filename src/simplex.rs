// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The base gradient noise every field is built from.
//!
//! Simplex noise divides the plane into equilateral triangles,
//! assigns a pseudo-random gradient to each triangle corner by way of
//! a permutation table, and blends the three corner contributions
//! with a radially symmetric falloff.  The result is continuous,
//! roughly band-limited to one feature per unit, and entirely
//! determined by the permutation table: the same coordinates always
//! produce the same value.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A deterministic scalar function of the plane.  Implementations
/// must return values in [-1, 1] and must be safe to sample from
/// many worker threads at once.
pub trait Noise2D {
    /// Sample the noise at (x, y).
    fn evaluate(&self, x: f32, y: f32) -> f32;
}

/// Ken Perlin's reference permutation.  Used whenever no seed is given.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

// Skew and unskew factors: (sqrt(3) - 1) / 2 and (3 - sqrt(3)) / 6
const F2: f32 = 0.366_025_4;
const G2: f32 = 0.211_324_87;

const GRADIENTS: [[f32; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Two-dimensional simplex noise over a fixed permutation table.
#[derive(Clone)]
pub struct Simplex {
    // Doubled so that corner hashing never has to wrap.
    perm: [u8; 512],
}

impl Simplex {
    /// Simplex noise over the reference permutation.  Every instance
    /// built this way is identical.
    pub fn new() -> Self {
        Simplex::from_permutation(&PERMUTATION)
    }

    /// Simplex noise over a permutation shuffled from `seed`.  The
    /// same seed always produces the same table.
    pub fn with_seed(seed: u64) -> Self {
        let mut source: Vec<u8> = (0..=255).collect();
        source.shuffle(&mut StdRng::seed_from_u64(seed));
        Simplex::from_permutation(&source)
    }

    fn from_permutation(source: &[u8]) -> Self {
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(source);
        perm[256..].copy_from_slice(source);
        Simplex { perm }
    }

    #[inline]
    fn corner(&self, hash: usize, x: f32, y: f32) -> f32 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let g = &GRADIENTS[hash % 12];
        let t = t * t;
        t * t * (g[0] * x + g[1] * y)
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Simplex::new()
    }
}

// Wrap a floored cell coordinate onto the permutation table.  The cast
// saturates, and only the low byte matters.
#[inline]
fn lattice(v: f32) -> usize {
    ((v as i64) & 255) as usize
}

impl Noise2D for Simplex {
    fn evaluate(&self, x: f32, y: f32) -> f32 {
        // Which skewed cell are we in?  Cell corners stay in f32 so that
        // far-off coordinates never leave integer range.
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower or upper triangle of the cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = lattice(i);
        let jj = lattice(j);
        let p = &self.perm;
        let gi0 = p[ii + p[jj] as usize] as usize;
        let gi1 = p[ii + i1 + p[jj + j1] as usize] as usize;
        let gi2 = p[ii + 1 + p[jj + 1] as usize] as usize;

        let n = self.corner(gi0, x0, y0) + self.corner(gi1, x1, y1) + self.corner(gi2, x2, y2);
        if !n.is_finite() {
            return 0.0;
        }
        num::clamp(70.0 * n, -1.0, 1.0)
    }
}
