//! Test utilities and fixtures for shemu development.
//!
//! Provides a deterministic [`SeededContext`] implementing
//! [`ExecutionContext`], and helpers for building vectors, heap entries, and
//! host memory references in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shemu_core::ExecutionContext;

/// Execution context with a seeded ChaCha8 stream.
///
/// Two contexts built from the same seed hand out identical randomness, so
/// randomized operations are reproducible in tests.
pub struct SeededContext {
    rng: ChaCha8Rng,
    draws: usize,
}

impl SeededContext {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// How many times an operation has borrowed the randomness source.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ExecutionContext for SeededContext {
    fn rng(&mut self) -> &mut dyn RngCore {
        self.draws += 1;
        &mut self.rng
    }
}
