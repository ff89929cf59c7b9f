//! Item number generation
//!
//! Generated numbers are not checked against the ones already stored.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::{ID_MAX, ID_MIN};

/// Source of item numbers for games entered without one
pub trait IdGenerator {
    /// Next item number, expected in `ID_MIN..=ID_MAX`
    fn next_id(&mut self) -> i32;
}

impl<F: FnMut() -> i32> IdGenerator for F {
    fn next_id(&mut self) -> i32 {
        self()
    }
}

/// Uniformly random 4-digit item numbers
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> i32 {
        self.rng.gen_range(ID_MIN..=ID_MAX)
    }
}
