//! Range samplers — serializable descriptors of "a value drawn from
//! this range/distribution", sampled against a caller-supplied
//! `SeededRandom` so the draw lands on the right deterministic stream.
//!
//! Content definitions (creature stats, hiring pools, task sizes) are
//! built out of these.

use crate::error::GameResult;
use crate::rng::SeededRandom;
use serde::{Deserialize, Serialize};

/// Uniform integer range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMaxInt {
    pub min: i64,
    pub max: i64,
}

impl MinMaxInt {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut SeededRandom) -> i64 {
        rng.get_int(self.min, self.max + 1)
    }
}

/// Uniform float range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxFloat {
    pub min: f32,
    pub max: f32,
}

impl MinMaxFloat {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut SeededRandom) -> f32 {
        rng.get_float_in(self.min, self.max)
    }
}

/// A normal distribution, optionally constrained to a closed interval.
///
/// One tagged type with one `sample`, not two types overriding each
/// other: the bounded form is a sampling-strategy variant of the
/// unbounded one, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GaussianRange {
    Unbounded {
        mean: f64,
        stdev: f64,
    },
    Bounded {
        min: f64,
        max: f64,
        mean: f64,
        stdev: f64,
    },
}

impl GaussianRange {
    /// Errors only for the `Bounded` variant with inverted bounds.
    pub fn sample(&self, rng: &mut SeededRandom) -> GameResult<f64> {
        match *self {
            Self::Unbounded { mean, stdev } => Ok(rng.get_gaussian(mean, stdev)),
            Self::Bounded {
                min,
                max,
                mean,
                stdev,
            } => rng.get_bounded_gaussian(min, max, mean, stdev),
        }
    }
}
