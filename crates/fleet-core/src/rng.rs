//! The simulation-wide random number generator.
//!
//! # Determinism strategy
//!
//! The engine has exactly one stochastic element: fault generation, modelled
//! as a time-homogeneous Poisson process.  All draws come from a single
//! `SimRng` passed explicitly to every operation that needs it, and the
//! simulation consumes it in vehicle iteration order.  With a fixed seed and a
//! fixed fleet the whole run is therefore bit-for-bit reproducible.
//!
//! Without a seed the generator is seeded from OS entropy.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Poisson};

/// Simulation-level RNG.
///
/// Not `Sync`: the draw order is part of the reproducibility contract, so the
/// generator must never be shared between threads.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic generator for a given seed.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy; results are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Number of events in an interval whose expected count is `mean`.
    ///
    /// A non-positive or non-finite mean yields zero events and does not
    /// consume any randomness.
    pub fn poisson(&mut self, mean: f64) -> u64 {
        if !mean.is_finite() || mean <= 0.0 {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(distribution) => {
                let draw: f64 = distribution.sample(&mut self.0);
                draw as u64
            }
            Err(_) => 0,
        }
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
