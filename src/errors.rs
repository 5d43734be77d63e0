// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between parameters and pixels.

use failure::Fail;

use crate::gradient::ColorMode;

/// Failures reported by field generation and colorization.  A flat
/// field is not among them; colorize recovers from that locally.
#[derive(Debug, Fail, PartialEq)]
pub enum NoiseError {
    /// One of the field dimensions is zero.
    #[fail(display = "field dimensions must be non-zero, got {}x{}", width, height)]
    EmptyField {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The field has more cells than a pixel buffer can address.
    #[fail(display = "field of {}x{} cells is too large to address", width, height)]
    FieldTooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The octave count was below zero.
    #[fail(display = "octave count must not be negative, got {}", _0)]
    NegativeOctaves(i32),

    /// The pixel buffer does not hold four bytes for every field cell.
    #[fail(
        display = "pixel buffer holds {} bytes but {} are required",
        actual, expected
    )]
    BufferSize {
        /// Bytes required.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// A gradient was built with the wrong number of control colors.
    #[fail(
        display = "{} color mode requires {} control colors, got {}",
        mode, expected, actual
    )]
    ControlColors {
        /// The mode being built.
        mode: ColorMode,
        /// Colors the mode consumes.
        expected: usize,
        /// Colors supplied.
        actual: usize,
    },

    /// A worker thread panicked.  Whatever it had written is discarded.
    #[fail(display = "a noise worker panicked; the field was discarded")]
    WorkerPanicked,

    /// Not a recognised algorithm name or number.
    #[fail(display = "unknown algorithm '{}' (expected fbm or turbulence)", _0)]
    UnknownAlgorithm(String),

    /// Not a recognised color mode name or number.
    #[fail(
        display = "unknown color mode '{}' (expected single, dual, triple or quadruple)",
        _0
    )]
    UnknownColorMode(String),
}
