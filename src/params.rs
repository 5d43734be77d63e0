// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs that describe a single field.

use std::fmt;

use crate::errors::NoiseError;
use crate::fractal::Algorithm;
use crate::gradient::ColorMode;

/// Everything `generate` needs to know.  A value, not a handle: to
/// change the picture, build a new one and generate again.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GenerationParameters {
    /// Frequency of the first octave, in cycles per cell.
    pub frequency: f32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Amplitude multiplier between octaves.
    pub gain: f32,
    /// Number of octaves.  Zero is a flat field; negative is an error.
    pub octaves: i32,
    /// fbm or turbulence.
    pub algorithm: Algorithm,
    /// Which gradient to paint with.
    pub color_mode: ColorMode,
    /// Field width in cells.
    pub width: usize,
    /// Field height in cells.
    pub height: usize,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        GenerationParameters {
            frequency: 0.01,
            lacunarity: 3.0,
            gain: 0.2,
            octaves: 3,
            algorithm: Algorithm::Fbm,
            color_mode: ColorMode::Quadruple,
            width: 800,
            height: 600,
        }
    }
}

impl GenerationParameters {
    /// Default parameters at a different size.
    pub fn with_size(width: usize, height: usize) -> Self {
        GenerationParameters {
            width,
            height,
            ..Default::default()
        }
    }

    /// The number of cells in the field, saturating at `usize::MAX`;
    /// `validate` rejects sizes where that matters.
    pub fn len(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check the preconditions of generation, returning the octave
    /// count as an unsigned number on success.  Frequency, lacunarity
    /// and gain are never rejected.
    pub fn validate(&self) -> Result<u32, NoiseError> {
        if self.is_empty() {
            return Err(NoiseError::EmptyField {
                width: self.width,
                height: self.height,
            });
        }
        // Four bytes of pixel buffer per cell must fit, too.
        if self
            .width
            .checked_mul(self.height)
            .and_then(|cells| cells.checked_mul(4))
            .is_none()
        {
            return Err(NoiseError::FieldTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.octaves < 0 {
            return Err(NoiseError::NegativeOctaves(self.octaves));
        }
        Ok(self.octaves as u32)
    }

    /// Nudge one knob by its usual increment.  Octaves are allowed to
    /// go negative here; `validate` is where that gets caught.
    pub fn step(&self, knob: Knob, direction: Direction) -> GenerationParameters {
        let forward = direction == Direction::Up;
        let sign = if forward { 1.0 } else { -1.0 };
        let mut next = *self;
        match knob {
            Knob::Octaves => next.octaves = self.octaves.saturating_add(if forward { 1 } else { -1 }),
            Knob::Frequency => next.frequency += 0.001 * sign,
            Knob::Gain => next.gain += 0.1 * sign,
            Knob::Lacunarity => next.lacunarity += 0.1 * sign,
            Knob::ColorMode => next.color_mode = self.color_mode.step(forward),
            Knob::Algorithm => next.algorithm = self.algorithm.step(forward),
        }
        next
    }
}

impl fmt::Display for GenerationParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} frequency {} lacunarity {} gain {} octaves {} algorithm {} colormode {}",
            self.width,
            self.height,
            self.frequency,
            self.lacunarity,
            self.gain,
            self.octaves,
            self.algorithm,
            self.color_mode
        )
    }
}

/// A parameter an interactive caller can nudge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Knob {
    /// Plus or minus one octave.
    Octaves,
    /// Plus or minus 0.001.
    Frequency,
    /// Plus or minus 0.1.
    Gain,
    /// Plus or minus 0.1.
    Lacunarity,
    /// The next or previous color mode.
    ColorMode,
    /// The next or previous algorithm.
    Algorithm,
}

/// Which way to nudge a knob.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increase.
    Up,
    /// Decrease.
    Down,
}
