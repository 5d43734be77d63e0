// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parallel field evaluation
//!
//! The field is a flat, row-major array of `width * height` cells.
//! It is cut into one contiguous run of cells per worker; each worker
//! owns its run outright for the duration of the call, so the array
//! itself needs no locking.  The only shared state is the running
//! minimum and maximum of the field, which each worker folds its own
//! extremes into exactly once, under a mutex, when it finishes.
//!
//! Because every cell is a pure function of its coordinates and the
//! parameters, the field is identical no matter how many workers
//! computed it or in what order they ran.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use itertools::{Itertools, MinMaxResult};

use crate::colorize::colorize;
use crate::errors::NoiseError;
use crate::gradient::GradientTable;
use crate::params::GenerationParameters;
use crate::simplex::{Noise2D, Simplex};

/// Split `[0, total)` into `workers` contiguous ranges of `total /
/// workers` cells each, with whatever integer division leaves over
/// added to the last range.  The ranges are disjoint, in order, and
/// cover every index exactly once.  A worker count of zero is treated
/// as one.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let batch = total / workers;
    (0..workers)
        .map(|i| {
            let start = i * batch;
            let end = if i + 1 == workers { total } else { start + batch };
            start..end
        })
        .collect()
}

/// The smallest and largest values seen so far.  Starts out empty,
/// as (+inf, -inf), so that the first merge always wins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extrema {
    /// Smallest value.
    pub min: f32,
    /// Largest value.
    pub max: f32,
}

impl Extrema {
    /// Nothing seen yet.
    pub fn empty() -> Self {
        Extrema {
            min: std::f32::INFINITY,
            max: std::f32::NEG_INFINITY,
        }
    }

    /// The extremes of a run of values.
    pub fn of(values: &[f32]) -> Self {
        match values.iter().cloned().minmax() {
            MinMaxResult::NoElements => Extrema::empty(),
            MinMaxResult::OneElement(v) => Extrema { min: v, max: v },
            MinMaxResult::MinMax(min, max) => Extrema { min, max },
        }
    }

    /// Widen to include `other`.
    pub fn merge(&mut self, other: Extrema) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// True when min and max coincide: every value is the same.
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}

/// The global extremes, shared by every worker of one generation.
struct Reduction(Mutex<Extrema>);

impl Reduction {
    fn new() -> Self {
        Reduction(Mutex::new(Extrema::empty()))
    }

    fn merge(&self, local: Extrema) {
        // Poisoned only after a worker panic, and that field is discarded.
        let mut global = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        global.merge(local);
    }

    fn into_inner(self) -> Extrema {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A finished field: the raw values plus their extremes.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    width: usize,
    height: usize,
    values: Vec<f32>,
    extrema: Extrema,
}

impl NoiseField {
    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The values, row-major: cell (x, y) is at `y * width + x`.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The value at (x, y), if that is inside the field.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }

    /// Smallest value in the field.
    pub fn min(&self) -> f32 {
        self.extrema.min
    }

    /// Largest value in the field.
    pub fn max(&self) -> f32 {
        self.extrema.max
    }

    /// Both extremes.
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a generated field.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rescale the field through `gradient` into an RGBA buffer of
    /// `4 * len()` bytes.  Alpha is left alone.
    pub fn colorize(&self, gradient: &GradientTable, pixels: &mut [u8]) -> Result<(), NoiseError> {
        colorize(
            &self.values,
            self.extrema.min,
            self.extrema.max,
            gradient,
            pixels,
        )
    }

    /// Hand back the raw values.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

/// Holds the parameters, the base noise, and the worker count for
/// one or more generations.  Once built, it is not mutable; every call
/// to `generate` starts fresh and hands back a brand new field.
pub struct FieldEvaluator<N = Simplex> {
    params: GenerationParameters,
    octaves: u32,
    noise: N,
    workers: usize,
}

impl FieldEvaluator<Simplex> {
    /// An evaluator over the reference simplex noise, with one worker
    /// per hardware thread.
    pub fn new(params: GenerationParameters) -> Result<Self, NoiseError> {
        FieldEvaluator::with_noise(params, Simplex::new())
    }
}

impl<N: Noise2D + Sync> FieldEvaluator<N> {
    /// An evaluator over any base noise.  Fails if the parameters
    /// describe an empty field or a negative octave count.
    pub fn with_noise(params: GenerationParameters, noise: N) -> Result<Self, NoiseError> {
        let octaves = params.validate()?;
        Ok(FieldEvaluator {
            params,
            octaves,
            noise,
            workers: num_cpus::get(),
        })
    }

    /// Use `workers` threads instead of one per hardware thread.  Zero
    /// is treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// The number of worker threads `generate` will start.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The parameters this evaluator was built with.
    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Fill one worker's run of cells, starting at flat index `offset`,
    /// and report the run's extremes.
    fn fill(&self, batch: &mut [f32], offset: usize) -> Extrema {
        let p = &self.params;
        for (j, cell) in (offset..).zip(batch.iter_mut()) {
            let x = (j % p.width) as f32;
            let y = (j / p.width) as f32;
            *cell = p.algorithm.sample(
                &self.noise,
                x,
                y,
                p.frequency,
                p.lacunarity,
                p.gain,
                self.octaves,
            );
        }
        Extrema::of(batch)
    }

    /// Compute the whole field.  Blocks until every worker has joined.
    /// If any worker panics the field is discarded and
    /// `NoiseError::WorkerPanicked` is returned instead.
    pub fn generate(&self) -> Result<NoiseField, NoiseError> {
        let started = Instant::now();
        let total = self.params.len();
        let mut values = vec![0.0_f32; total];
        let ranges = partition(total, self.workers);
        let reduction = Reduction::new();

        let outcome = crossbeam::scope(|spawner| {
            let mut handles = Vec::with_capacity(ranges.len());
            let mut rest: &mut [f32] = &mut values;
            for (worker, range) in ranges.iter().enumerate() {
                let current = rest;
                let (batch, tail) = current.split_at_mut(range.len());
                rest = tail;
                let offset = range.start;
                let reduction = &reduction;
                debug!("worker {} takes cells {}..{}", worker, range.start, range.end);
                handles.push(spawner.spawn(move |_| {
                    let local = self.fill(batch, offset);
                    reduction.merge(local);
                }));
            }
            handles
                .into_iter()
                .map(|handle| handle.join())
                .fold(true, |clean, joined| clean && joined.is_ok())
        });

        match outcome {
            Ok(true) => {}
            _ => {
                error!("noise worker panicked; discarding {}", self.params);
                return Err(NoiseError::WorkerPanicked);
            }
        }

        let extrema = reduction.into_inner();
        info!(
            "{} in {:.1}ms across {} workers",
            self.params,
            started.elapsed().as_secs_f64() * 1000.0,
            ranges.len()
        );
        Ok(NoiseField {
            width: self.params.width,
            height: self.params.height,
            values,
            extrema,
        })
    }
}

/// Generate a field from `params` over the reference simplex noise,
/// using every hardware thread.
pub fn generate(params: GenerationParameters) -> Result<NoiseField, NoiseError> {
    FieldEvaluator::new(params)?.generate()
}
