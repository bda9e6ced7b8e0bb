//! Deterministic seeding helpers.
//!
//! The gridworld dynamics are deterministic; these streams drive the
//! random policies used by demos, vector rollouts and tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Type alias for the default RNG stream used across the crate.
pub type RngStream = ChaCha8Rng;

/// Create a new RNG stream from a root seed.
pub fn rng_from_seed(seed: u64) -> RngStream {
    RngStream::seed_from_u64(seed)
}

/// Derive one RNG stream per environment from a base seed (`base + i`).
pub fn streams_for(base_seed: u64, n: usize) -> Vec<RngStream> {
    (0..n).map(|i| rng_from_seed(base_seed.wrapping_add(i as u64))).collect()
}
