//! Weighted selection without replacement.
//!
//! Picks exactly one item from a weighted collection, optionally
//! filtered by an acceptance predicate. Rejected items leave the
//! candidate pool permanently, so repeated rejection walks down the
//! remaining weight mass instead of looping forever.
//!
//! The caller's slice is never mutated — the pool is a private list
//! of indices.

use crate::rng::SeededRandom;
use serde::{Deserialize, Serialize};

/// Anything that carries a selection weight.
/// Weights must be finite and >= 0.
pub trait Weighted {
    fn weight(&self) -> f32;
}

/// The common case: an arbitrary payload with an attached weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedOption<T> {
    pub option: T,
    pub weight: f32,
}

impl<T> WeightedOption<T> {
    pub fn new(option: T, weight: f32) -> Self {
        Self { option, weight }
    }
}

impl<T> Weighted for WeightedOption<T> {
    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Select one item, weight-proportionally, accepting everything.
pub fn select_weighted<'a, T: Weighted>(rng: &mut SeededRandom, options: &'a [T]) -> &'a T {
    select_weighted_with(rng, options, |_| true)
}

/// Select one item, weight-proportionally, subject to `accept`.
///
/// Algorithm:
/// 1. Draw one uniformly-random fallback candidate up front.
/// 2. While nothing is chosen and candidates remain: draw a value in
///    `[0, total_weight)`, walk the pool in order subtracting weights
///    until the remainder fits inside a candidate, remove that
///    candidate, and keep it only if `accept` says so.
/// 3. An exhausted pool resolves to the step-1 fallback. The fallback
///    deliberately bypasses the predicate — an exhausted pool means
///    the predicate rejected everything, and the contract is to always
///    return *some* item.
///
/// Zero-weight items are reachable only as the fallback or on an
/// exact boundary hit. Panics on an empty slice: callers guarantee at
/// least one option.
pub fn select_weighted_with<'a, T: Weighted>(
    rng: &mut SeededRandom,
    options: &'a [T],
    mut accept: impl FnMut(&T) -> bool,
) -> &'a T {
    assert!(!options.is_empty(), "select_weighted: no options");

    let fallback = rng.get_int(0, options.len() as i64) as usize;

    let mut pool: Vec<usize> = (0..options.len()).collect();
    let mut selected: Option<usize> = None;

    while selected.is_none() && !pool.is_empty() {
        let total: f32 = pool.iter().map(|&i| options[i].weight()).sum();
        let mut value = rng.get_float_in(0.0, total);

        let mut walked = false;
        for slot in 0..pool.len() {
            let candidate = pool[slot];
            let weight = options[candidate].weight();
            if value <= weight {
                // Out of the pool whether accepted or not.
                pool.remove(slot);
                walked = true;
                if accept(&options[candidate]) {
                    selected = Some(candidate);
                }
                break;
            }
            value -= weight;
        }

        if !walked {
            // Floating-point drift left every candidate out of reach.
            // Drop one at random and try again.
            let slot = rng.get_int(0, pool.len() as i64) as usize;
            pool.remove(slot);
        }
    }

    &options[selected.unwrap_or(fallback)]
}
