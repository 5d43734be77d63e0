// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map raw field values onto a gradient and into an RGBA buffer.

use crate::errors::NoiseError;
use crate::gradient::{GradientTable, GRADIENT_SIZE};

/// Rescale every value in `field` from [min, max] onto the 256 entries
/// of `gradient` and write the color into the matching pixel of
/// `pixels`, four bytes per pixel, RGBA.  Alpha is never written.
///
/// A flat field (min == max) has no meaningful scale, so the whole
/// buffer is painted with the first gradient entry instead.
pub fn colorize(
    field: &[f32],
    min: f32,
    max: f32,
    gradient: &GradientTable,
    pixels: &mut [u8],
) -> Result<(), NoiseError> {
    if pixels.len() != field.len() * 4 {
        return Err(NoiseError::BufferSize {
            expected: field.len() * 4,
            actual: pixels.len(),
        });
    }

    let scale = 255.0 / (max - min);
    if !scale.is_finite() {
        warn!("flat field ({} to {}); painting a single color", min, max);
        let c = gradient[0];
        for pixel in pixels.chunks_mut(4) {
            pixel[0] = c.r;
            pixel[1] = c.g;
            pixel[2] = c.b;
        }
        return Ok(());
    }

    let offset = min * scale;
    let top = (GRADIENT_SIZE - 1) as f32;
    for (v, pixel) in field.iter().zip(pixels.chunks_mut(4)) {
        let index = num::clamp((v * scale - offset).round(), 0.0, top) as usize;
        let c = gradient[index];
        pixel[0] = c.r;
        pixel[1] = c.g;
        pixel[2] = c.b;
    }
    Ok(())
}
