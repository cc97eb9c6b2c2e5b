//! Departure-time RNG.
//!
//! Wraps `ChaCha8Rng` so that a seeded schedule is reproducible on every
//! platform. Schedule generation takes the RNG explicitly rather than
//! reaching for a thread-local generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::ScheduleConfig;
use crate::domain::Minutes;

/// Random source for departure offsets.
#[derive(Debug, Clone)]
pub struct ScheduleRng(pub ChaCha8Rng);

impl ScheduleRng {
    /// Create an RNG seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Seeded if the configuration has a seed, otherwise from entropy.
    pub fn from_config(config: &ScheduleConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed_u64(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform offset in `[0, max]` minutes.
    pub fn offset_minutes(&mut self, max: Minutes) -> Minutes {
        self.0.gen_range(0..=max)
    }
}
