#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fractal noise field generator
//!
//! Procedural textures such as clouds, marble, and terrain maps are
//! usually built by summing a smooth, deterministic noise function at
//! several scales.  This crate does that for a rectangular grid of
//! cells: it samples simplex noise at every cell, folds several
//! octaves together with either fractal Brownian motion or
//! turbulence, and records the minimum and maximum of the result.
//! The grid is computed by a pool of worker threads, one per hardware
//! thread by default, each owning a contiguous run of cells.
//!
//! The finished field can then be stretched across a 256-entry color
//! gradient and written into an RGBA pixel buffer owned by the
//! caller.
//!
//! ```no_run
//! use fractalnoise::{generate, GenerationParameters, GradientTable};
//!
//! let params = GenerationParameters::default();
//! let field = generate(params).unwrap();
//! let gradient = GradientTable::for_mode(params.color_mode);
//! let mut pixels = vec![255u8; field.len() * 4];
//! field.colorize(&gradient, &mut pixels).unwrap();
//! ```
//!
//! An interactive caller keeps one `GenerationParameters` value,
//! nudges a knob when the user asks for it, and regenerates from the
//! new value.  Nothing is shared between generations.
//!
//! ```
//! use fractalnoise::{generate, Direction, GenerationParameters, GradientTable, Knob};
//!
//! let mut params = GenerationParameters::with_size(64, 48);
//! let mut pixels = vec![255u8; params.len() * 4];
//! for &(knob, direction) in &[(Knob::Octaves, Direction::Up), (Knob::ColorMode, Direction::Down)] {
//!     params = params.step(knob, direction);
//!     let field = generate(params).unwrap();
//!     let gradient = GradientTable::for_mode(params.color_mode);
//!     field.colorize(&gradient, &mut pixels).unwrap();
//! }
//! assert_eq!(params.octaves, 4);
//! ```

extern crate crossbeam;
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;
extern crate rand;

pub mod colorize;
pub mod errors;
pub mod evaluator;
pub mod fractal;
pub mod gradient;
pub mod params;
pub mod simplex;

pub use colorize::colorize;
pub use errors::NoiseError;
pub use evaluator::{generate, partition, Extrema, FieldEvaluator, NoiseField};
pub use fractal::{fbm, turbulence, Algorithm};
pub use gradient::{Color, ColorMode, GradientTable, GRADIENT_SIZE};
pub use params::{Direction, GenerationParameters, Knob};
pub use simplex::{Noise2D, Simplex};
