//! Deterministic entropy source for the yard.
//!
//! Randomness is never ambient: generators take a `&mut YardRng` so a run is
//! fully reproducible from its seed, and the charging scheduler itself never
//! touches an RNG at all.  Work that runs on several threads draws what it
//! needs from the single stream before fanning out.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG handed to arrival and task generators.
pub struct YardRng(SmallRng);

impl YardRng {
    pub fn new(seed: u64) -> Self {
        YardRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
