// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Color ramps.
//!
//! A gradient table maps a normalized value, quantized to one of 256
//! steps, to a color.  The tables are built from pairs of control
//! colors, one pair per band, with hand-tuned band boundaries and
//! per-band interpolation factors.  Those boundaries and factors are
//! not derived from anything; they are what makes the pictures look
//! the way they do, and they are reproduced exactly.  Note that some
//! factors run past 1.0, so a band can overshoot its second color and
//! saturate.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::errors::NoiseError;

/// Number of entries in every gradient table.
pub const GRADIENT_SIZE: usize = 256;

/// An RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Interpolate each channel independently from `self` toward
    /// `other`.  `t` is not restricted to [0, 1]; the channel is
    /// clamped to a byte and then truncated.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }
}

fn lerp(b1: u8, b2: u8, t: f32) -> u8 {
    let v = f32::from(b1) + t * (f32::from(b2) - f32::from(b1));
    num::clamp(v, 0.0, 255.0) as u8
}

/// How many bands the gradient has.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// One band, two control colors.
    Single,
    /// Two bands, four control colors.
    Dual,
    /// Three bands, six control colors.
    Triple,
    /// Four bands, eight control colors.
    Quadruple,
}

const SINGLE: [Color; 2] = [Color::new(255, 0, 0), Color::new(255, 242, 0)];

const DUAL: [Color; 4] = [
    Color::new(0, 0, 175),
    Color::new(80, 100, 200),
    Color::new(12, 192, 75),
    Color::new(255, 255, 255),
];

const TRIPLE: [Color; 6] = [
    Color::new(0, 0, 100),
    Color::new(80, 100, 200),
    Color::new(210, 210, 0),
    Color::new(100, 80, 0),
    Color::new(50, 160, 20),
    Color::new(0, 80, 10),
];

const QUADRUPLE: [Color; 8] = [
    Color::new(0, 0, 100),
    Color::new(80, 100, 200),
    Color::new(210, 210, 0),
    Color::new(100, 80, 0),
    Color::new(50, 160, 20),
    Color::new(0, 80, 10),
    Color::new(100, 100, 100),
    Color::new(250, 250, 250),
];

impl ColorMode {
    /// Every mode, in selector order.
    pub const ALL: [ColorMode; 4] = [
        ColorMode::Single,
        ColorMode::Dual,
        ColorMode::Triple,
        ColorMode::Quadruple,
    ];

    /// The number of control colors this mode consumes.
    pub fn control_colors(self) -> usize {
        match self {
            ColorMode::Single => 2,
            ColorMode::Dual => 4,
            ColorMode::Triple => 6,
            ColorMode::Quadruple => 8,
        }
    }

    /// The stock palette for this mode: red to yellow, ocean to snow,
    /// and two terrain ramps.
    pub fn palette(self) -> &'static [Color] {
        match self {
            ColorMode::Single => &SINGLE,
            ColorMode::Dual => &DUAL,
            ColorMode::Triple => &TRIPLE,
            ColorMode::Quadruple => &QUADRUPLE,
        }
    }

    /// The neighbouring mode in selector order, stopping at the ends.
    pub fn step(self, forward: bool) -> ColorMode {
        let at = ColorMode::ALL.iter().position(|m| *m == self).unwrap_or(0);
        let next = if forward {
            (at + 1).min(ColorMode::ALL.len() - 1)
        } else {
            at.saturating_sub(1)
        };
        ColorMode::ALL[next]
    }

    // The band boundaries and local interpolation factors.
    fn sample(self, c: &[Color], pct: f32) -> Color {
        match self {
            ColorMode::Single => c[0].lerp(c[1], pct),
            ColorMode::Dual => {
                if pct < 0.5 {
                    c[0].lerp(c[1], pct * 2.0)
                } else {
                    c[2].lerp(c[3], pct * 1.5 - 0.5)
                }
            }
            ColorMode::Triple => {
                if pct < 0.65 {
                    c[0].lerp(c[1], pct * 2.0)
                } else if pct < 0.70 {
                    c[2].lerp(c[3], pct * 1.5 - 0.5)
                } else {
                    c[4].lerp(c[5], pct * 1.5 - 0.5)
                }
            }
            ColorMode::Quadruple => {
                if pct < 0.65 {
                    c[0].lerp(c[1], pct * 2.0)
                } else if pct < 0.70 {
                    c[2].lerp(c[3], pct * 1.5 - 0.5)
                } else if pct < 0.90 {
                    c[4].lerp(c[5], pct * 1.5 - 0.5)
                } else {
                    c[6].lerp(c[7], pct * 3.5)
                }
            }
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ColorMode::Single => "single",
            ColorMode::Dual => "dual",
            ColorMode::Triple => "triple",
            ColorMode::Quadruple => "quadruple",
        };
        write!(f, "{}", name)
    }
}

/// Accepts the mode names, or the selector numbers 1 through 4.
impl FromStr for ColorMode {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" => Ok(ColorMode::Single),
            "dual" | "2" => Ok(ColorMode::Dual),
            "triple" | "3" => Ok(ColorMode::Triple),
            "quadruple" | "4" => Ok(ColorMode::Quadruple),
            _ => Err(NoiseError::UnknownColorMode(s.to_string())),
        }
    }
}

/// A 256-entry color ramp.  Entry `i` is the color for the normalized
/// value `i / 255`.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientTable {
    mode: ColorMode,
    colors: Vec<Color>,
}

impl GradientTable {
    /// Build a table for `mode` from exactly `mode.control_colors()`
    /// control colors.
    pub fn new(mode: ColorMode, controls: &[Color]) -> Result<GradientTable, NoiseError> {
        if controls.len() != mode.control_colors() {
            return Err(NoiseError::ControlColors {
                mode,
                expected: mode.control_colors(),
                actual: controls.len(),
            });
        }
        let colors = (0..GRADIENT_SIZE)
            .map(|i| mode.sample(controls, i as f32 / 255.0))
            .collect();
        Ok(GradientTable { mode, colors })
    }

    /// Build a table for `mode` from its stock palette.
    pub fn for_mode(mode: ColorMode) -> GradientTable {
        GradientTable {
            mode,
            colors: (0..GRADIENT_SIZE)
                .map(|i| mode.sample(mode.palette(), i as f32 / 255.0))
                .collect(),
        }
    }

    /// The mode this table was built for.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Always 256.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true; here to keep `len` company.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The entries, darkest value first.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Index<usize> for GradientTable {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        let d = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs() <= 1;
        d(a.r, b.r) && d(a.g, b.g) && d(a.b, b.b)
    }

    #[test]
    fn every_table_has_256_entries() {
        for mode in ColorMode::ALL.iter() {
            assert_eq!(GradientTable::for_mode(*mode).len(), GRADIENT_SIZE);
        }
    }

    #[test]
    fn tables_start_at_the_first_control_color() {
        for mode in ColorMode::ALL.iter() {
            let table = GradientTable::for_mode(*mode);
            assert!(close(table[0], mode.palette()[0]), "{}: {:?}", mode, table[0]);
        }
    }

    #[test]
    fn tables_end_at_the_last_control_color() {
        for mode in &[ColorMode::Single, ColorMode::Dual, ColorMode::Triple] {
            let table = GradientTable::for_mode(*mode);
            let last = *mode.palette().last().unwrap();
            assert!(close(table[255], last), "{}: {:?}", mode, table[255]);
        }
    }

    #[test]
    fn quadruple_top_band_saturates() {
        // t = 3.5 at the top: 100 + 3.5 * 150 runs off the end of a byte.
        let table = GradientTable::for_mode(ColorMode::Quadruple);
        assert_eq!(table[255], Color::new(255, 255, 255));
    }

    #[test]
    fn single_ramp_is_linear() {
        let table = GradientTable::new(
            ColorMode::Single,
            &[Color::new(0, 0, 0), Color::new(255, 255, 255)],
        )
        .unwrap();
        for (i, c) in table.colors().iter().enumerate() {
            assert!(close(*c, Color::new(i as u8, i as u8, i as u8)), "{}: {:?}", i, c);
        }
    }

    #[test]
    fn dual_switches_bands_at_one_half() {
        let table = GradientTable::for_mode(ColorMode::Dual);
        // 127 / 255 is just under one half, 128 / 255 just over.
        assert_eq!(table[127], DUAL[0].lerp(DUAL[1], 127.0 / 255.0 * 2.0));
        assert_eq!(table[128], DUAL[2].lerp(DUAL[3], 128.0 / 255.0 * 1.5 - 0.5));
    }

    #[test]
    fn quadruple_bands_use_their_own_pairs() {
        let table = GradientTable::for_mode(ColorMode::Quadruple);
        let q = &QUADRUPLE;
        let pct = |i: usize| i as f32 / 255.0;
        assert_eq!(table[100], q[0].lerp(q[1], pct(100) * 2.0));
        assert_eq!(table[170], q[2].lerp(q[3], pct(170) * 1.5 - 0.5));
        assert_eq!(table[200], q[4].lerp(q[5], pct(200) * 1.5 - 0.5));
        assert_eq!(table[240], q[6].lerp(q[7], pct(240) * 3.5));
    }

    #[test]
    fn wrong_control_count_is_rejected() {
        let err = GradientTable::new(ColorMode::Triple, &DUAL).unwrap_err();
        assert_eq!(
            err,
            NoiseError::ControlColors {
                mode: ColorMode::Triple,
                expected: 6,
                actual: 4
            }
        );
    }

    #[test]
    fn explicit_palette_matches_stock_table() {
        for mode in ColorMode::ALL.iter() {
            let built = GradientTable::new(*mode, mode.palette()).unwrap();
            assert_eq!(built, GradientTable::for_mode(*mode));
        }
    }

    #[test]
    fn lerp_clamps_overshoot() {
        let c = Color::new(10, 200, 100).lerp(Color::new(20, 100, 100), 3.0);
        assert_eq!(c, Color::new(40, 0, 100));
    }

    #[test]
    fn color_mode_steps_and_parses() {
        assert_eq!(ColorMode::Single.step(false), ColorMode::Single);
        assert_eq!(ColorMode::Dual.step(true), ColorMode::Triple);
        assert_eq!(ColorMode::Quadruple.step(true), ColorMode::Quadruple);
        assert_eq!("3".parse::<ColorMode>(), Ok(ColorMode::Triple));
        assert_eq!("QUADRUPLE".parse::<ColorMode>(), Ok(ColorMode::Quadruple));
        assert!("sepia".parse::<ColorMode>().is_err());
    }
}
