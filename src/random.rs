//! Random source helpers.
//!
//! Every randomized operation takes an explicit `&mut R: Rng`; these helpers
//! only build the default generator and shuffle slices.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a reproducible generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating system entropy.
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
