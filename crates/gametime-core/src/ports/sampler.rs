//! OutcomeSampler port - 結果のサンプリング
//!
//! The strategy picks the action; the world picks the outcome. The sampler
//! models the latter as a uniform draw over the chosen row.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait OutcomeSampler {
    /// Index in `0..len`. `len` is always at least 1.
    fn sample(&mut self, len: usize) -> usize;
}

/// Uniform draw backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible draws, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSampler for UniformSampler {
    fn sample(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always the same column (clamped to the row). For tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSampler {
    column: usize,
}

impl FixedSampler {
    pub fn new(column: usize) -> Self {
        Self { column }
    }
}

impl OutcomeSampler for FixedSampler {
    fn sample(&mut self, len: usize) -> usize {
        self.column.min(len.saturating_sub(1))
    }
}
