//! Bank sampling behind a narrow, injectable interface.
//!
//! Personas draw each response fragment uniformly at random from a fixed
//! bank. `BankSampler` keeps that one "pick one of N" decision swappable so
//! tests can replay a fixed index sequence instead of consuming entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform "pick one of N" source consumed during response generation.
pub trait BankSampler: Send {
    /// Returns an index in `0..len`. Callers only invoke this with a
    /// non-empty bank; registration guarantees the required banks are
    /// non-empty and the optional suggestion bank is gated on emptiness.
    fn pick(&mut self, len: usize) -> usize;
}

/// Default sampler backed by a seedable PRNG.
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant: identical seeds produce identical draw sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BankSampler for RandomSampler {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with an empty bank");
        self.rng.gen_range(0..len)
    }
}

/// Deterministic sampler that replays a fixed index sequence, wrapping when
/// exhausted. Indices larger than the bank are reduced modulo its length.
pub struct SequenceSampler {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceSampler {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl BankSampler for SequenceSampler {
    fn pick(&mut self, len: usize) -> usize {
        let raw = self.indices.get(self.cursor).copied().unwrap_or(0);
        if !self.indices.is_empty() {
            self.cursor = (self.cursor + 1) % self.indices.len();
        }
        raw % len.max(1)
    }
}
