// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fractal sums of base noise.
//!
//! A single sample of simplex noise has one characteristic feature
//! size.  Summing several samples ("octaves"), each at a higher
//! frequency and lower amplitude than the last, layers fine detail on
//! top of coarse structure.  Lacunarity is the per-octave frequency
//! multiplier; gain is the per-octave amplitude multiplier.  Neither
//! is validated: zero or negative values are legitimate, if
//! degenerate, inputs.

use std::fmt;
use std::str::FromStr;

use crate::errors::NoiseError;
use crate::simplex::Noise2D;

/// Fractal Brownian motion: the signed sum of every octave.  The range
/// grows with the octave count and the gain, so the result is not
/// bounded to [-1, 1].  Zero octaves sum to zero.
pub fn fbm<N: Noise2D + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    frequency: f32,
    lacunarity: f32,
    gain: f32,
    octaves: u32,
) -> f32 {
    let mut sum = 0.0;
    let mut frequency = frequency;
    let mut amplitude = 1.0;
    for _ in 0..octaves {
        sum += noise.evaluate(x * frequency, y * frequency) * amplitude;
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Turbulence: the sum of the absolute value of every octave, which
/// folds the noise at its zero crossings into sharp creases.  Never
/// negative.
pub fn turbulence<N: Noise2D + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    frequency: f32,
    lacunarity: f32,
    gain: f32,
    octaves: u32,
) -> f32 {
    let mut sum = 0.0;
    let mut frequency = frequency;
    let mut amplitude = 1.0;
    for _ in 0..octaves {
        sum += (noise.evaluate(x * frequency, y * frequency) * amplitude).abs();
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Which fractal sum to build a field from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Fractal Brownian motion.
    Fbm,
    /// Absolute-valued octaves.
    Turbulence,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Fbm, Algorithm::Turbulence];

    /// Run this algorithm at (x, y).
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn sample<N: Noise2D + ?Sized>(
        self,
        noise: &N,
        x: f32,
        y: f32,
        frequency: f32,
        lacunarity: f32,
        gain: f32,
        octaves: u32,
    ) -> f32 {
        match self {
            Algorithm::Fbm => fbm(noise, x, y, frequency, lacunarity, gain, octaves),
            Algorithm::Turbulence => turbulence(noise, x, y, frequency, lacunarity, gain, octaves),
        }
    }

    /// The neighbouring algorithm in selector order, stopping at the ends.
    pub fn step(self, forward: bool) -> Algorithm {
        match (self, forward) {
            (Algorithm::Fbm, true) => Algorithm::Turbulence,
            (Algorithm::Turbulence, false) => Algorithm::Fbm,
            (same, _) => same,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Fbm => write!(f, "fbm"),
            Algorithm::Turbulence => write!(f, "turbulence"),
        }
    }
}

/// Accepts the algorithm names, or the selector numbers 1 and 2.
impl FromStr for Algorithm {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fbm" | "1" => Ok(Algorithm::Fbm),
            "turbulence" | "2" => Ok(Algorithm::Turbulence),
            _ => Err(NoiseError::UnknownAlgorithm(s.to_string())),
        }
    }
}
