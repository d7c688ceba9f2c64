//! Seeded RNG construction.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Creates a small, fast RNG from a `u64` seed.
///
/// `seed_from_u64` runs the seed through a SplitMix64 scramble, so
/// consecutive seed values yield decorrelated streams. Per-worker seeds
/// can therefore be derived by simple arithmetic on a base seed.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
