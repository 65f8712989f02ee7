//! Clip selection
//!
//! The bank asks a picker which clip of a category to play, so tests can
//! swap the random source for a seeded or scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index into a category's clip list
pub trait SoundPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Deterministic picker
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomPicker<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> SoundPicker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
