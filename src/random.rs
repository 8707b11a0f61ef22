//! Seeded random selection utilities for reproducible generation
//!
//! All stochastic choices flow through an explicitly constructed
//! [`RandomSource`] so a fixed seed reproduces an artwork exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a random source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform value in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform value in [low, high)
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        (high - low).mul_add(self.unit(), low)
    }

    /// Uniform integer in [low, high] (inclusive)
    pub fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// True with the given probability (clamped to [0, 1])
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform choice of an index below `count`
    ///
    /// Returns 0 when `count` is 0 or 1.
    pub fn index(&mut self, count: usize) -> usize {
        if count < 2 {
            return 0;
        }
        self.rng.random_range(0..count)
    }

    /// Uniform choice of a slice element
    ///
    /// Returns `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index(items.len()))
    }

    /// Generic weighted random selection
    ///
    /// Returns an index into the weights array using the cumulative
    /// distribution, or 0 when all weights are non-positive.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.unit() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}
