//! Injectable random sources.
//!
//! Every draw in the simulation goes through [`RandomSource`], so a run can be
//! seeded for reproducibility or scripted for tests.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::core::error::{Result, SimError};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// PCG-backed generator, seeded explicitly or from OS entropy.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: Option<u64>,
    inner: Pcg64Mcg,
}

impl SeededSource {
    /// Deterministic generator for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Nondeterministic generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Seed this generator was built from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        // 53 high bits -> uniform in [0, 1)
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    draws: Vec<f64>,
    pos: usize,
}

impl FixedSequence {
    /// Fails if `draws` is empty or contains a value outside `[0, 1)`.
    pub fn new(draws: Vec<f64>) -> Result<Self> {
        if draws.is_empty() {
            return Err(SimError::invalid_parameter(
                "fixed sequence needs at least one draw",
            ));
        }
        if let Some(bad) = draws.iter().find(|d| !(0.0..1.0).contains(*d)) {
            return Err(SimError::invalid_parameter(format!(
                "fixed sequence draw {} is outside [0, 1)",
                bad
            )));
        }
        Ok(Self { draws, pos: 0 })
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        let value = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        value
    }
}
